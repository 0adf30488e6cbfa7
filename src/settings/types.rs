use crate::artifact::ArtifactFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable holding the store identifier
pub const ENV_STORE_ID: &str = "STORE_ID";

/// Environment variable holding the backend base URL
pub const ENV_BASE_URL: &str = "BASE_URL";

/// Environment variable holding the notification service URL
pub const ENV_NOTIFICATION_URL: &str = "NOTIFICATION_URL";

/// Environment variable holding the environment label
pub const ENV_ENVIRONMENT: &str = "SITE_ENV";

/// Notification service used for contact-number capture
pub const DEFAULT_NOTIFICATION_URL: &str = "https://dev-bloom-email-service.azurewebsites.net";

/// Where the generated configuration lands in the site tree
pub const DEFAULT_OUTPUT_PATH: &str = "app/config/site-config.ts";

/// Environment label used when none is given
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Settings for a generation run and for the backend client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Store whose site configuration is generated
    pub store_id: String,

    /// Backend base URL, e.g. "https://api.example.com"
    pub base_url: String,

    /// Notification service base URL
    pub notification_url: String,

    /// Environment label written into the artifact header
    pub environment: String,

    /// Path of the generated artifact
    pub output_path: PathBuf,

    /// Defaults file replacing the built-in defaults
    pub defaults_path: Option<PathBuf>,

    /// Artifact format
    pub format: ArtifactFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_id: String::new(),
            base_url: String::new(),
            notification_url: DEFAULT_NOTIFICATION_URL.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            defaults_path: None,
            format: ArtifactFormat::default(),
        }
    }
}

impl Settings {
    /// Overrides fields from environment variables
    ///
    /// `lookup` is called with each variable name; empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(store_id) = get(ENV_STORE_ID) {
            self.store_id = store_id;
        }
        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(notification_url) = get(ENV_NOTIFICATION_URL) {
            self.notification_url = notification_url;
        }
        if let Some(environment) = get(ENV_ENVIRONMENT) {
            self.environment = environment;
        }
    }
}
