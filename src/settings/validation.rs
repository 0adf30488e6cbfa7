use crate::settings::types::Settings;
use crate::SettingsError;
use url::Url;

/// Validates the complete settings
pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
    validate_store_id(&settings.store_id)?;
    validate_endpoint("base_url", &settings.base_url)?;
    validate_endpoint("notification_url", &settings.notification_url)?;

    if settings.environment.trim().is_empty() {
        return Err(SettingsError::Validation(
            "environment cannot be empty".to_string(),
        ));
    }

    if settings.output_path.as_os_str().is_empty() {
        return Err(SettingsError::Validation(
            "output_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the store identifier
fn validate_store_id(store_id: &str) -> Result<(), SettingsError> {
    if store_id.is_empty() {
        return Err(SettingsError::Validation(
            "store_id cannot be empty".to_string(),
        ));
    }

    if store_id.chars().any(char::is_whitespace) {
        return Err(SettingsError::Validation(format!(
            "store_id must not contain whitespace, got '{}'",
            store_id
        )));
    }

    Ok(())
}

/// Validates an endpoint base URL (http or https)
fn validate_endpoint(field: &str, value: &str) -> Result<(), SettingsError> {
    if value.is_empty() {
        return Err(SettingsError::Validation(format!(
            "{} cannot be empty",
            field
        )));
    }

    let url = Url::parse(value)
        .map_err(|e| SettingsError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(SettingsError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}
