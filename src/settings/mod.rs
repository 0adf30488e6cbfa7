//! Settings module for Oasis-Sitegen
//!
//! This module loads the tool's own settings: which store to generate for,
//! where the backend lives, and where the artifact goes. Values come from an
//! optional TOML file, then environment variables, then command-line flags,
//! each layer overriding the one before.
//!
//! # Example
//!
//! ```no_run
//! use oasis_sitegen::settings::{load_settings, validate};
//! use std::path::Path;
//!
//! let settings = load_settings(Some(Path::new("sitegen.toml"))).unwrap();
//! validate(&settings).unwrap();
//! println!("Generating for store {}", settings.store_id);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Settings, DEFAULT_ENVIRONMENT, DEFAULT_NOTIFICATION_URL, DEFAULT_OUTPUT_PATH, ENV_BASE_URL,
    ENV_ENVIRONMENT, ENV_NOTIFICATION_URL, ENV_STORE_ID,
};

// Re-export parser and validation functions
pub use parser::{load_settings, load_settings_with, read_settings_file};
pub use validation::validate;
