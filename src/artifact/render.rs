use crate::artifact::ArtifactFormat;
use crate::site::SiteConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Metadata stamped onto every generated artifact
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactMeta {
    /// When the artifact was generated
    pub generated_at: DateTime<Utc>,

    /// Environment label, e.g. "production"
    pub environment: String,
}

impl ArtifactMeta {
    /// Creates metadata stamped with the current time
    pub fn now(environment: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            environment: environment.into(),
        }
    }

    /// Generation time as an RFC 3339 string with millisecond precision
    pub fn timestamp(&self) -> String {
        self.generated_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonArtifact<'a> {
    generated_at: String,
    environment: &'a str,
    site_config: &'a SiteConfig,
}

/// Renders the configuration in the requested format
///
/// # Arguments
///
/// * `config` - The resolved configuration
/// * `meta` - Generation time and environment label
/// * `format` - TypeScript module or JSON
///
/// # Returns
///
/// * `Ok(String)` - The artifact contents
/// * `Err(serde_json::Error)` - The configuration could not be serialized
pub fn render_artifact(
    config: &SiteConfig,
    meta: &ArtifactMeta,
    format: ArtifactFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ArtifactFormat::TypeScript => render_typescript(config, meta),
        ArtifactFormat::Json => {
            let artifact = JsonArtifact {
                generated_at: meta.timestamp(),
                environment: &meta.environment,
                site_config: config,
            };
            let mut out = serde_json::to_string_pretty(&artifact)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_typescript(config: &SiteConfig, meta: &ArtifactMeta) -> Result<String, serde_json::Error> {
    let body = serde_json::to_string_pretty(config)?;

    let mut ts = String::new();
    ts.push_str(&format!("// Generated at {}\n", meta.timestamp()));
    ts.push_str(&format!("// Environment: {}\n\n", meta.environment));
    ts.push_str("import { SiteConfig } from \"@/lib/types\";\n\n");
    ts.push_str(&format!("const siteConfig: SiteConfig = {};\n\n", body));
    ts.push_str("export default siteConfig;\n");

    Ok(ts)
}
