use crate::settings::types::Settings;
use crate::SettingsError;
use std::path::Path;

/// Reads and parses a settings file without validating it
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Returns
///
/// * `Ok(Settings)` - Parsed settings; keys missing from the file keep their defaults
/// * `Err(SettingsError)` - Failed to read or parse the file
pub fn read_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

/// Loads settings from an optional file and the given environment lookup
///
/// The result is not validated; command-line overrides are usually applied
/// first and [`validate`](crate::settings::validate) called afterwards.
pub fn load_settings_with<F>(path: Option<&Path>, lookup: F) -> Result<Settings, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match path {
        Some(path) => {
            tracing::debug!("Reading settings from {}", path.display());
            read_settings_file(path)?
        }
        None => Settings::default(),
    };

    settings.apply_env(lookup);
    Ok(settings)
}

/// Loads settings from an optional file and the process environment
///
/// # Example
///
/// ```no_run
/// use oasis_sitegen::settings::load_settings;
///
/// let settings = load_settings(None).unwrap();
/// println!("Output: {}", settings.output_path.display());
/// ```
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    load_settings_with(path, |name| std::env::var(name).ok())
}
