//! Build-time generation pipeline
//!
//! Fetch the remote configuration, resolve it against the defaults, render
//! the artifact and write it. Either every step succeeds and the artifact is
//! replaced, or the previous artifact is left untouched.

use crate::api::ApiClient;
use crate::artifact::{render_artifact, write_artifact, ArtifactFormat, ArtifactMeta};
use crate::resolve::{config_digest, resolve};
use crate::settings::Settings;
use crate::site::{default_config, load_defaults, PartialSiteConfig, SiteConfig};
use crate::SitegenError;
use std::path::PathBuf;

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct Generated {
    /// The resolved configuration
    pub config: SiteConfig,

    /// SHA-256 of the configuration's JSON form
    pub digest: String,

    /// The rendered artifact
    pub contents: String,

    /// Where the artifact was (or would have been) written
    pub output_path: PathBuf,

    /// False for dry runs
    pub written: bool,
}

/// Loads the defaults named in the settings, or the built-in ones
pub fn load_configured_defaults(settings: &Settings) -> Result<SiteConfig, SitegenError> {
    match &settings.defaults_path {
        Some(path) => load_defaults(path),
        None => Ok(default_config()),
    }
}

/// Resolves and renders without touching the network or the filesystem
///
/// # Returns
///
/// * `Ok((SiteConfig, String))` - The resolved configuration and the artifact text
/// * `Err(SitegenError)` - Resolution failed or the configuration could not be serialized
pub fn build_artifact(
    remote: PartialSiteConfig,
    defaults: SiteConfig,
    meta: &ArtifactMeta,
    format: ArtifactFormat,
) -> Result<(SiteConfig, String), SitegenError> {
    let config = resolve(remote, defaults)?;
    let contents = render_artifact(&config, meta, format)?;
    Ok((config, contents))
}

/// Runs the pipeline with an existing client
pub async fn run_generation(
    client: &ApiClient,
    settings: &Settings,
    dry_run: bool,
) -> Result<Generated, SitegenError> {
    let defaults = load_configured_defaults(settings)?;

    let remote = client.fetch_site_config().await?;
    tracing::debug!("Remote configuration carries {} extra fields", remote.extra.len());

    let meta = ArtifactMeta::now(settings.environment.clone());
    let (config, contents) = build_artifact(remote, defaults, &meta, settings.format)?;
    let digest = config_digest(&config)?;
    tracing::info!("Configuration resolved (digest: {})", digest);

    let written = if dry_run {
        tracing::info!("Dry run, not writing {}", settings.output_path.display());
        false
    } else {
        write_artifact(&settings.output_path, &contents)?;
        tracing::info!(
            "Configuration generated successfully at {}",
            settings.output_path.display()
        );
        true
    };

    Ok(Generated {
        config,
        digest,
        contents,
        output_path: settings.output_path.clone(),
        written,
    })
}

/// Runs a complete generation for the given settings
///
/// This is the main entry point for the build step. It will:
/// 1. Build the HTTP client
/// 2. Load the defaults
/// 3. Fetch the remote configuration (once, no retry)
/// 4. Resolve, render and write the artifact
///
/// # Arguments
///
/// * `settings` - Validated settings
/// * `dry_run` - Resolve and render, but do not write
///
/// # Returns
///
/// * `Ok(Generated)` - Generation completed
/// * `Err(SitegenError)` - Generation failed; nothing was written
pub async fn generate(settings: &Settings, dry_run: bool) -> Result<Generated, SitegenError> {
    let client = ApiClient::new(settings)?;
    run_generation(&client, settings, dry_run).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResolveError;
    use chrono::{TimeZone, Utc};

    fn meta() -> ArtifactMeta {
        ArtifactMeta {
            generated_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap(),
            environment: "test".to_string(),
        }
    }

    #[test]
    fn test_build_artifact_is_deterministic() {
        let remote: PartialSiteConfig =
            serde_json::from_str(r#"{"name": "Casa Verde", "storeId": "s1"}"#).unwrap();

        let (_, first) = build_artifact(
            remote.clone(),
            default_config(),
            &meta(),
            ArtifactFormat::TypeScript,
        )
        .unwrap();
        let (_, second) =
            build_artifact(remote, default_config(), &meta(), ArtifactFormat::TypeScript)
                .unwrap();

        assert_eq!(first, second);
        assert!(!first.contains("storeId"));
    }

    #[test]
    fn test_build_artifact_reports_resolution_error() {
        let remote: PartialSiteConfig =
            serde_json::from_str(r#"{"hours": [{"day": "Monday", "open": ""}]}"#).unwrap();

        let err = build_artifact(remote, default_config(), &meta(), ArtifactFormat::Json)
            .unwrap_err();

        assert!(matches!(
            err,
            SitegenError::Resolve(ResolveError::InvalidHours { index: 0, field: "open" })
        ));
    }

    #[test]
    fn test_built_in_defaults_without_path() {
        let settings = Settings::default();
        assert_eq!(load_configured_defaults(&settings).unwrap(), default_config());
    }
}
