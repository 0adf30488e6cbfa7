//! Configuration resolver
//!
//! This module turns the partial configuration served by the backend into
//! the complete configuration the site is built from:
//! 1. Merge the remote document over the defaults
//! 2. Derive the palette from the resolved theme name and type
//! 3. Validate the merged result
//! 4. Strip server-only fields
//!
//! # Example
//!
//! ```
//! use oasis_sitegen::resolve::resolve;
//! use oasis_sitegen::site::{default_config, PartialSiteConfig};
//!
//! let remote: PartialSiteConfig =
//!     serde_json::from_str(r#"{"name": "Casa Verde"}"#).unwrap();
//! let config = resolve(remote, default_config()).unwrap();
//! assert_eq!(config.name, "Casa Verde");
//! ```

mod merge;
mod palette;
mod sanitize;
mod validation;

pub use merge::{merge, merge_keyed, replace_gallery, Keyed, Overlay};
pub use palette::{palette_for, palette_names, FALLBACK_PALETTE};
pub use sanitize::{sanitize, SERVER_ONLY_FIELDS};
pub use validation::validate;

use crate::site::{PartialSiteConfig, SiteConfig};
use crate::ResolveResult;
use sha2::{Digest, Sha256};

/// Resolves a remote partial configuration against the defaults
///
/// # Arguments
///
/// * `remote` - The partial configuration fetched from the backend
/// * `defaults` - The complete default configuration
///
/// # Returns
///
/// * `Ok(SiteConfig)` - The merged, validated and sanitized configuration
/// * `Err(ResolveError)` - A required section is missing or a field is invalid
pub fn resolve(remote: PartialSiteConfig, defaults: SiteConfig) -> ResolveResult<SiteConfig> {
    let mut config = merge(remote, defaults)?;

    config.theme.theme = palette_for(&config.theme.theme_name, config.theme.theme_type);
    tracing::debug!(
        "Theme resolved to {}/{}",
        config.theme.theme_name,
        config.theme.theme_type
    );

    validate(&config)?;

    let removed = sanitize(&mut config);
    if !removed.is_empty() {
        tracing::debug!("Removed server-only fields: {}", removed.join(", "));
    }

    Ok(config)
}

/// Computes a SHA-256 digest of the configuration's JSON form
///
/// Two resolutions of the same inputs produce the same digest.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 digest
/// * `Err(serde_json::Error)` - The configuration could not be serialized
pub fn config_digest(config: &SiteConfig) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(config)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
