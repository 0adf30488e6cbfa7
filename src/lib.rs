//! Oasis-Sitegen: build-time configuration generator for a restaurant site
//!
//! This crate fetches a partial site configuration from the backend, merges it
//! over the built-in defaults, validates and sanitizes the result, and writes it
//! out as the static configuration artifact the site is rendered from. It also
//! carries the small HTTP client the site uses for its menu, contact and
//! reservation endpoints.

pub mod api;
pub mod artifact;
pub mod generate;
pub mod resolve;
pub mod settings;
pub mod site;

use thiserror::Error;

/// Main error type for Oasis-Sitegen operations
#[derive(Debug, Error)]
pub enum SitegenError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to write artifact {path}: {source}")]
    Artifact {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings-specific errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in settings: {0}")]
    InvalidUrl(String),
}

/// Errors raised while resolving the site configuration
///
/// Every variant names the field that failed so the build log points straight
/// at the offending part of the remote document.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("Missing required section: {0}")]
    MissingSection(&'static str),

    #[error("Invalid business hours entry #{index}: {field} is empty")]
    InvalidHours { index: usize, field: &'static str },

    #[error("Invalid testimonial #{index}: {field} is empty")]
    InvalidTestimonial { index: usize, field: &'static str },

    #[error("Invalid rating for testimonial by {author}: {rating}")]
    InvalidRating { author: String, rating: String },

    #[error("Invalid theme configuration: {0}")]
    InvalidTheme(String),
}

/// Backend API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("API responded with status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

/// Result type alias for Oasis-Sitegen operations
pub type Result<T> = std::result::Result<T, SitegenError>;

/// Result type alias for settings operations
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Result type alias for resolution
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Result type alias for API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

// Re-export commonly used types
pub use resolve::{palette_for, resolve};
pub use settings::Settings;
pub use site::{PartialSiteConfig, SiteConfig, Theme, ThemeType};
