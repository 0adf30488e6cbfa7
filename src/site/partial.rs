//! Partial site configuration as served by the backend
//!
//! Every field is optional at every depth; `null` is read the same as an
//! absent field.

use crate::site::types::{Stat, Theme};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialSiteConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<PartialAddress>,
    pub contact: Option<PartialContact>,
    pub social: Option<PartialSocialLinks>,
    pub hours: Option<Vec<PartialBusinessHours>>,
    pub reservation: Option<PartialReservation>,
    pub theme: Option<PartialThemeConfig>,
    pub homepage: Option<PartialHomepage>,

    /// Everything else the backend stores on the site record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialContact {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub form: Option<PartialContactForm>,
    pub contact_details: Option<PartialContactDetails>,
    pub map_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialContactForm {
    pub name_placeholder: Option<String>,
    pub email_placeholder: Option<String>,
    pub phone_placeholder: Option<String>,
    pub message_placeholder: Option<String>,
    pub submit_button_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialContactDetails {
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub yelp: Option<String>,
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialBusinessHours {
    pub day: Option<String>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub is_closed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialReservation {
    pub enabled: Option<bool>,
    pub provider: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub submit_button_text: Option<String>,
    pub occasions: Option<Vec<String>>,
    pub policies: Option<Vec<String>>,
}

/// Theme selection as stored remotely
///
/// `theme_type` stays a string here; it is parsed during resolution so that
/// an unknown variant is reported as a theme error. A stored palette is read
/// but never used, the palette is always derived from name and type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialThemeConfig {
    pub theme_name: Option<String>,
    pub theme_type: Option<String>,
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialHomepage {
    pub hero: Option<PartialHero>,
    pub about: Option<PartialAboutSection>,
    pub features: Option<PartialFeaturesSection>,
    pub testimonials: Option<PartialTestimonialsSection>,
    pub gallery: Option<PartialGallerySection>,
    pub cta: Option<PartialCallToAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialHero {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub background_image: Option<String>,
    pub cta: Option<PartialCtaButtons>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialCtaButtons {
    pub primary: Option<PartialCtaLink>,
    pub secondary: Option<PartialCtaLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialCtaLink {
    pub text: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialAboutSection {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub stats: Option<Vec<Stat>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFeaturesSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Option<Vec<PartialFeature>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFeature {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTestimonialsSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Option<Vec<PartialTestimonial>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTestimonial {
    pub id: Option<String>,
    pub author: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub rating: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialGallerySection {
    pub categories: Option<Vec<PartialGalleryCategory>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialGalleryCategory {
    pub name: Option<String>,
    pub images: Option<Vec<PartialGalleryImage>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialGalleryImage {
    pub url: Option<String>,
    pub caption: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialCallToAction {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub background_image: Option<String>,
}
