use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

/// Complete site configuration consumed by every page
///
/// Every section deserializes to its empty form when missing so that a
/// defaults file lacking a section is caught by validation with the section's
/// name instead of a generic parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub address: Address,
    pub contact: Contact,
    pub social: SocialLinks,
    pub hours: Vec<BusinessHours>,
    pub reservation: Reservation,
    pub theme: ThemeConfig,
    pub homepage: Homepage,

    /// Top-level fields not modelled above, carried through from the source
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteConfig {
    /// Returns the resolved color palette
    pub fn palette(&self) -> &Theme {
        &self.theme.theme
    }
}

/// Postal address of the restaurant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Contact page content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub form: ContactForm,
    pub contact_details: ContactDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

/// Labels shown on the contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub phone_placeholder: String,
    pub message_placeholder: String,
    pub submit_button_text: String,
}

/// Where guests can reach the restaurant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub address: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
}

/// Social profile links; every platform is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yelp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// Opening hours for one day of the week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessHours {
    pub day: String,
    pub open: String,
    pub close: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
}

/// Reservation page content and provider settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reservation {
    pub enabled: bool,
    pub provider: String,
    pub url: String,
    pub title: String,
    pub subtitle: String,
    pub submit_button_text: String,
    pub occasions: Vec<String>,
    pub policies: Vec<String>,
}

/// Light or dark variant of a palette
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Light,
    Dark,
}

impl ThemeType {
    /// Returns the wire name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme type '{}'", other)),
        }
    }
}

/// Five color roles the pages are painted with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

/// Theme selection plus the palette derived from it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub theme_name: String,
    pub theme_type: ThemeType,
    pub theme: Theme,
}

/// Home page sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Homepage {
    pub hero: Hero,
    pub about: AboutSection,
    pub features: FeaturesSection,
    pub testimonials: TestimonialsSection,
    pub gallery: GallerySection,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub heading: String,
    pub subheading: String,
    pub background_image: String,
    pub cta: CtaButtons,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaButtons {
    pub primary: CtaLink,
    pub secondary: CtaLink,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaLink {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub title: String,
    pub description: String,
    pub image: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

/// A guest review shown on the home page
///
/// The rating keeps the JSON number as received so that a fractional or
/// out-of-range value survives until validation can name it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: Number,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: String::new(),
            author: String::new(),
            role: None,
            content: String::new(),
            image: None,
            rating: Number::from(0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    pub categories: Vec<GalleryCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryCategory {
    pub name: String,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image: String,
}
