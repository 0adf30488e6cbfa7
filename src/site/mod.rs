//! Site configuration data model
//!
//! This module holds the complete [`SiteConfig`] every page is rendered from,
//! its all-optional mirror [`PartialSiteConfig`] as served by the backend, and
//! the built-in default configuration.
//!
//! # Example
//!
//! ```
//! use oasis_sitegen::site::default_config;
//!
//! let config = default_config();
//! assert_eq!(config.hours.len(), 7);
//! ```

mod defaults;
mod partial;
mod types;

// Re-export types
pub use types::{
    Address, BusinessHours, CallToAction, Contact, ContactDetails, ContactForm, CtaButtons,
    CtaLink, Feature, FeaturesSection, GalleryCategory, GalleryImage, GallerySection, Hero,
    Homepage, AboutSection, Reservation, SiteConfig, SocialLinks, Stat, Testimonial,
    TestimonialsSection, Theme, ThemeConfig, ThemeType,
};

pub use partial::{
    PartialAboutSection, PartialAddress, PartialBusinessHours, PartialCallToAction,
    PartialContact, PartialContactDetails, PartialContactForm, PartialCtaButtons,
    PartialCtaLink, PartialFeature, PartialFeaturesSection, PartialGalleryCategory,
    PartialGalleryImage, PartialGallerySection, PartialHero, PartialHomepage,
    PartialReservation, PartialSiteConfig, PartialSocialLinks, PartialTestimonial,
    PartialTestimonialsSection, PartialThemeConfig,
};

// Re-export default configuration
pub use defaults::{default_config, load_defaults};
