//! Merge of a partial remote configuration over the defaults
//!
//! Merge semantics:
//! - Scalars: remote wins when present
//! - Objects: merged field by field, recursively
//! - Plain lists: REPLACE when the remote supplies them
//! - Keyed lists: each remote item completed from the default item with the
//!   same key, or from the first default item when no key matches
//! - Gallery categories: REPLACE, with caption/alt filled in per image

use crate::site::*;
use crate::{ResolveError, ResolveResult};

/// Overlays a partial value onto a complete one
pub trait Overlay: Sized {
    /// The all-optional mirror of `Self`
    type Partial;

    /// Returns `self` with every field present in `partial` replaced
    fn overlay(self, partial: Self::Partial) -> Self;
}

/// A list element that is merged by identity rather than position
pub trait Keyed: Overlay + Clone + Default {
    /// The identity of a complete item
    fn key(&self) -> &str;

    /// The identity of a partial item, if it carries one
    fn partial_key(partial: &Self::Partial) -> Option<&str>;
}

/// Merges remote list items against the default list by key
///
/// Each remote item is laid over the default item sharing its key. When no
/// default item matches, the first default item is used as the base instead,
/// so a remote item never loses the fields the defaults would have supplied.
/// The output has exactly one entry per remote item, in remote order.
pub fn merge_keyed<T: Keyed>(remote: Vec<T::Partial>, defaults: &[T]) -> Vec<T> {
    remote
        .into_iter()
        .map(|item| {
            let base = T::partial_key(&item)
                .and_then(|key| defaults.iter().find(|d| d.key() == key))
                .or_else(|| defaults.first())
                .cloned()
                .unwrap_or_default();
            base.overlay(item)
        })
        .collect()
}

/// Picks the remote string unless it is missing or empty
fn non_empty(remote: Option<String>, default: String) -> String {
    remote.filter(|s| !s.is_empty()).unwrap_or(default)
}

/// Merges a nested section, keeping the default when the remote omits it
fn section<T: Overlay>(default: T, remote: Option<T::Partial>) -> T {
    match remote {
        Some(partial) => default.overlay(partial),
        None => default,
    }
}

/// Merges the remote configuration over the defaults
///
/// The returned configuration still carries the remote palette choice only
/// as name and type; the palette itself is derived by the caller.
pub fn merge(remote: PartialSiteConfig, defaults: SiteConfig) -> ResolveResult<SiteConfig> {
    let theme = merge_theme(remote.theme, defaults.theme)?;

    let hours = match remote.hours {
        Some(items) if !items.is_empty() => merge_keyed(items, &defaults.hours),
        _ => defaults.hours,
    };

    let mut extra = defaults.extra;
    extra.extend(remote.extra);

    Ok(SiteConfig {
        name: non_empty(remote.name, defaults.name),
        description: non_empty(remote.description, defaults.description),
        address: section(defaults.address, remote.address),
        contact: section(defaults.contact, remote.contact),
        social: section(defaults.social, remote.social),
        hours,
        reservation: section(defaults.reservation, remote.reservation),
        theme,
        homepage: section(defaults.homepage, remote.homepage),
        extra,
    })
}

/// Resolves theme name and type, leaving the palette untouched
fn merge_theme(
    remote: Option<PartialThemeConfig>,
    defaults: ThemeConfig,
) -> ResolveResult<ThemeConfig> {
    let remote = remote.unwrap_or_default();

    let theme_type = match remote.theme_type.filter(|t| !t.is_empty()) {
        Some(raw) => raw.parse::<ThemeType>().map_err(ResolveError::InvalidTheme)?,
        None => defaults.theme_type,
    };

    Ok(ThemeConfig {
        theme_name: non_empty(remote.theme_name, defaults.theme_name),
        theme_type,
        theme: defaults.theme,
    })
}

/// Builds the gallery from remote categories, replacing the defaults outright
pub fn replace_gallery(categories: Vec<PartialGalleryCategory>) -> GallerySection {
    let categories = categories
        .into_iter()
        .map(|category| GalleryCategory {
            name: category.name.unwrap_or_default(),
            images: category
                .images
                .unwrap_or_default()
                .into_iter()
                .map(|image| {
                    let caption = image.caption.filter(|c| !c.is_empty());
                    let alt = image
                        .alt
                        .filter(|a| !a.is_empty())
                        .or_else(|| caption.clone())
                        .unwrap_or_default();
                    GalleryImage {
                        url: image.url.unwrap_or_default(),
                        caption: Some(caption.unwrap_or_default()),
                        alt: Some(alt),
                    }
                })
                .collect(),
        })
        .collect();

    GallerySection { categories }
}

impl Overlay for Address {
    type Partial = PartialAddress;

    fn overlay(self, p: PartialAddress) -> Self {
        Self {
            street: p.street.unwrap_or(self.street),
            city: p.city.unwrap_or(self.city),
            state: p.state.unwrap_or(self.state),
            zip: p.zip.unwrap_or(self.zip),
            country: p.country.unwrap_or(self.country),
        }
    }
}

impl Overlay for Contact {
    type Partial = PartialContact;

    fn overlay(self, p: PartialContact) -> Self {
        Self {
            title: p.title.unwrap_or(self.title),
            subtitle: p.subtitle.unwrap_or(self.subtitle),
            form: section(self.form, p.form),
            contact_details: section(self.contact_details, p.contact_details),
            map_url: p.map_url.or(self.map_url),
        }
    }
}

impl Overlay for ContactForm {
    type Partial = PartialContactForm;

    fn overlay(self, p: PartialContactForm) -> Self {
        Self {
            name_placeholder: p.name_placeholder.unwrap_or(self.name_placeholder),
            email_placeholder: p.email_placeholder.unwrap_or(self.email_placeholder),
            phone_placeholder: p.phone_placeholder.unwrap_or(self.phone_placeholder),
            message_placeholder: p.message_placeholder.unwrap_or(self.message_placeholder),
            submit_button_text: p.submit_button_text.unwrap_or(self.submit_button_text),
        }
    }
}

impl Overlay for ContactDetails {
    type Partial = PartialContactDetails;

    fn overlay(self, p: PartialContactDetails) -> Self {
        Self {
            address: p.address.unwrap_or(self.address),
            email: p.email.unwrap_or(self.email),
            phone: p.phone.unwrap_or(self.phone),
            whatsapp: p.whatsapp.unwrap_or(self.whatsapp),
        }
    }
}

impl Overlay for SocialLinks {
    type Partial = PartialSocialLinks;

    fn overlay(self, p: PartialSocialLinks) -> Self {
        Self {
            facebook: p.facebook.or(self.facebook),
            instagram: p.instagram.or(self.instagram),
            twitter: p.twitter.or(self.twitter),
            yelp: p.yelp.or(self.yelp),
            youtube: p.youtube.or(self.youtube),
        }
    }
}

impl Overlay for BusinessHours {
    type Partial = PartialBusinessHours;

    fn overlay(self, p: PartialBusinessHours) -> Self {
        Self {
            day: p.day.unwrap_or(self.day),
            open: p.open.unwrap_or(self.open),
            close: p.close.unwrap_or(self.close),
            is_closed: p.is_closed.or(self.is_closed),
        }
    }
}

impl Keyed for BusinessHours {
    fn key(&self) -> &str {
        &self.day
    }

    fn partial_key(partial: &PartialBusinessHours) -> Option<&str> {
        partial.day.as_deref()
    }
}

impl Overlay for Reservation {
    type Partial = PartialReservation;

    fn overlay(self, p: PartialReservation) -> Self {
        Self {
            enabled: p.enabled.unwrap_or(self.enabled),
            provider: p.provider.unwrap_or(self.provider),
            url: p.url.unwrap_or(self.url),
            title: p.title.unwrap_or(self.title),
            subtitle: p.subtitle.unwrap_or(self.subtitle),
            submit_button_text: p.submit_button_text.unwrap_or(self.submit_button_text),
            occasions: p.occasions.unwrap_or(self.occasions),
            policies: p.policies.unwrap_or(self.policies),
        }
    }
}

impl Overlay for Homepage {
    type Partial = PartialHomepage;

    fn overlay(self, p: PartialHomepage) -> Self {
        let gallery = match p.gallery.and_then(|g| g.categories) {
            Some(categories) => replace_gallery(categories),
            None => self.gallery,
        };

        Self {
            hero: section(self.hero, p.hero),
            about: section(self.about, p.about),
            features: section(self.features, p.features),
            testimonials: section(self.testimonials, p.testimonials),
            gallery,
            cta: section(self.cta, p.cta),
        }
    }
}

impl Overlay for Hero {
    type Partial = PartialHero;

    fn overlay(self, p: PartialHero) -> Self {
        Self {
            heading: p.heading.unwrap_or(self.heading),
            subheading: p.subheading.unwrap_or(self.subheading),
            background_image: p.background_image.unwrap_or(self.background_image),
            cta: section(self.cta, p.cta),
        }
    }
}

impl Overlay for CtaButtons {
    type Partial = PartialCtaButtons;

    fn overlay(self, p: PartialCtaButtons) -> Self {
        Self {
            primary: section(self.primary, p.primary),
            secondary: section(self.secondary, p.secondary),
        }
    }
}

impl Overlay for CtaLink {
    type Partial = PartialCtaLink;

    fn overlay(self, p: PartialCtaLink) -> Self {
        Self {
            text: p.text.unwrap_or(self.text),
            link: p.link.unwrap_or(self.link),
        }
    }
}

impl Overlay for AboutSection {
    type Partial = PartialAboutSection;

    fn overlay(self, p: PartialAboutSection) -> Self {
        Self {
            title: p.title.unwrap_or(self.title),
            description: p.description.unwrap_or(self.description),
            image: p.image.unwrap_or(self.image),
            stats: p.stats.unwrap_or(self.stats),
        }
    }
}

impl Overlay for FeaturesSection {
    type Partial = PartialFeaturesSection;

    fn overlay(self, p: PartialFeaturesSection) -> Self {
        let items = match p.items {
            Some(items) => merge_keyed(items, &self.items),
            None => self.items,
        };

        Self {
            title: p.title.unwrap_or(self.title),
            subtitle: p.subtitle.unwrap_or(self.subtitle),
            items,
        }
    }
}

impl Overlay for Feature {
    type Partial = PartialFeature;

    fn overlay(self, p: PartialFeature) -> Self {
        Self {
            id: p.id.unwrap_or(self.id),
            title: p.title.unwrap_or(self.title),
            description: p.description.unwrap_or(self.description),
            image: p.image.unwrap_or(self.image),
        }
    }
}

impl Keyed for Feature {
    fn key(&self) -> &str {
        &self.id
    }

    fn partial_key(partial: &PartialFeature) -> Option<&str> {
        partial.id.as_deref()
    }
}

impl Overlay for TestimonialsSection {
    type Partial = PartialTestimonialsSection;

    fn overlay(self, p: PartialTestimonialsSection) -> Self {
        let items = match p.items {
            Some(items) => merge_keyed(items, &self.items),
            None => self.items,
        };

        Self {
            title: p.title.unwrap_or(self.title),
            subtitle: p.subtitle.unwrap_or(self.subtitle),
            items,
        }
    }
}

impl Overlay for Testimonial {
    type Partial = PartialTestimonial;

    fn overlay(self, p: PartialTestimonial) -> Self {
        Self {
            id: p.id.unwrap_or(self.id),
            author: p.author.unwrap_or(self.author),
            role: p.role.or(self.role),
            content: p.content.unwrap_or(self.content),
            image: p.image.or(self.image),
            rating: p.rating.unwrap_or(self.rating),
        }
    }
}

impl Keyed for Testimonial {
    fn key(&self) -> &str {
        &self.id
    }

    fn partial_key(partial: &PartialTestimonial) -> Option<&str> {
        partial.id.as_deref()
    }
}

impl Overlay for CallToAction {
    type Partial = PartialCallToAction;

    fn overlay(self, p: PartialCallToAction) -> Self {
        Self {
            title: p.title.unwrap_or(self.title),
            subtitle: p.subtitle.unwrap_or(self.subtitle),
            button_text: p.button_text.unwrap_or(self.button_text),
            button_link: p.button_link.unwrap_or(self.button_link),
            background_image: p.background_image.unwrap_or(self.background_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn hours(day: &str, open: &str, close: &str) -> BusinessHours {
        BusinessHours {
            day: day.to_string(),
            open: open.to_string(),
            close: close.to_string(),
            is_closed: None,
        }
    }

    #[test]
    fn test_keyed_merge_completes_from_matching_default() {
        let defaults = vec![hours("Monday", "17:00", "23:00"), hours("Friday", "17:00", "00:00")];
        let remote = vec![PartialBusinessHours {
            day: Some("Friday".to_string()),
            ..Default::default()
        }];

        let merged = merge_keyed(remote, &defaults);
        assert_eq!(merged, vec![hours("Friday", "17:00", "00:00")]);
    }

    #[test]
    fn test_keyed_merge_falls_back_to_first_default() {
        let defaults = vec![hours("Monday", "17:00", "23:00"), hours("Friday", "18:00", "01:00")];
        let remote = vec![PartialBusinessHours {
            day: Some("Holiday".to_string()),
            close: Some("15:00".to_string()),
            ..Default::default()
        }];

        let merged = merge_keyed(remote, &defaults);
        assert_eq!(merged, vec![hours("Holiday", "17:00", "15:00")]);
    }

    #[test]
    fn test_keyed_merge_without_key_takes_first_default_key() {
        let defaults = vec![Feature {
            id: "1".to_string(),
            title: "Farm to Table".to_string(),
            description: "Local".to_string(),
            image: "/farm.jpg".to_string(),
        }];
        let remote = vec![PartialFeature {
            title: Some("Wood Oven".to_string()),
            ..Default::default()
        }];

        let merged = merge_keyed(remote, &defaults);
        assert_eq!(merged[0].id, "1");
        assert_eq!(merged[0].title, "Wood Oven");
        assert_eq!(merged[0].image, "/farm.jpg");
    }

    #[test]
    fn test_keyed_merge_with_no_defaults_uses_empty_item() {
        let remote = vec![PartialTestimonial {
            id: Some("9".to_string()),
            author: Some("Ana".to_string()),
            ..Default::default()
        }];

        let merged = merge_keyed::<Testimonial>(remote, &[]);
        assert_eq!(merged[0].author, "Ana");
        assert_eq!(merged[0].content, "");
        assert_eq!(merged[0].rating, Number::from(0));
    }

    #[test]
    fn test_empty_remote_hours_keep_defaults() {
        let defaults = default_config();
        let remote = PartialSiteConfig {
            hours: Some(vec![]),
            ..Default::default()
        };

        let merged = merge(remote, defaults.clone()).unwrap();
        assert_eq!(merged.hours, defaults.hours);
    }

    #[test]
    fn test_empty_name_falls_back() {
        let remote = PartialSiteConfig {
            name: Some(String::new()),
            description: Some("Seasonal plates".to_string()),
            ..Default::default()
        };

        let merged = merge(remote, default_config()).unwrap();
        assert_eq!(merged.name, "Oasis");
        assert_eq!(merged.description, "Seasonal plates");
    }

    #[test]
    fn test_nested_contact_merge() {
        let remote = PartialSiteConfig {
            contact: Some(PartialContact {
                contact_details: Some(PartialContactDetails {
                    email: Some("hello@casa.example".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let defaults = default_config();
        let merged = merge(remote, defaults.clone()).unwrap();
        assert_eq!(merged.contact.contact_details.email, "hello@casa.example");
        assert_eq!(
            merged.contact.contact_details.phone,
            defaults.contact.contact_details.phone
        );
        assert_eq!(merged.contact.form, defaults.contact.form);
        assert_eq!(merged.contact.title, defaults.contact.title);
    }

    #[test]
    fn test_reservation_lists_replace_wholesale() {
        let remote = PartialSiteConfig {
            reservation: Some(PartialReservation {
                occasions: Some(vec!["Wedding".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let defaults = default_config();
        let merged = merge(remote, defaults.clone()).unwrap();
        assert_eq!(merged.reservation.occasions, vec!["Wedding".to_string()]);
        assert_eq!(merged.reservation.policies, defaults.reservation.policies);
    }

    #[test]
    fn test_hero_cta_merges_per_button() {
        let remote = PartialSiteConfig {
            homepage: Some(PartialHomepage {
                hero: Some(PartialHero {
                    cta: Some(PartialCtaButtons {
                        primary: Some(PartialCtaLink {
                            text: Some("Book Now".to_string()),
                            link: None,
                        }),
                        secondary: None,
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let defaults = default_config();
        let merged = merge(remote, defaults.clone()).unwrap();
        let cta = &merged.homepage.hero.cta;
        assert_eq!(cta.primary.text, "Book Now");
        assert_eq!(cta.primary.link, "/reservations");
        assert_eq!(cta.secondary, defaults.homepage.hero.cta.secondary);
        assert_eq!(merged.homepage.hero.heading, defaults.homepage.hero.heading);
    }

    #[test]
    fn test_gallery_replaces_and_fills_alt() {
        let categories = vec![PartialGalleryCategory {
            name: Some("Brunch".to_string()),
            images: Some(vec![
                PartialGalleryImage {
                    url: Some("/eggs.jpg".to_string()),
                    caption: Some("Shakshuka".to_string()),
                    alt: None,
                },
                PartialGalleryImage {
                    url: Some("/toast.jpg".to_string()),
                    caption: None,
                    alt: None,
                },
            ]),
        }];

        let gallery = replace_gallery(categories);
        assert_eq!(gallery.categories.len(), 1);
        let images = &gallery.categories[0].images;
        assert_eq!(images[0].alt.as_deref(), Some("Shakshuka"));
        assert_eq!(images[1].caption.as_deref(), Some(""));
        assert_eq!(images[1].alt.as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_theme_type_is_rejected() {
        let remote = PartialSiteConfig {
            theme: Some(PartialThemeConfig {
                theme_type: Some("sepia".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let err = merge(remote, default_config()).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidTheme(_)));
    }
}
