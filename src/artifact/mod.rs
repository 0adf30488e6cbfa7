//! Generated configuration artifact
//!
//! This module handles:
//! - Rendering the resolved configuration as a TypeScript module or JSON
//! - Stamping it with the generation time and environment label
//! - Writing it in place without ever leaving a half-written file

mod render;
mod writer;

pub use render::{render_artifact, ArtifactMeta};
pub use writer::write_artifact;

use serde::Deserialize;
use std::fmt;

/// Output format of the generated artifact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// `site-config.ts` exporting a typed `siteConfig` constant
    #[default]
    #[value(name = "typescript")]
    TypeScript,

    /// Plain JSON document with the metadata alongside the configuration
    Json,
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeScript => f.write_str("typescript"),
            Self::Json => f.write_str("json"),
        }
    }
}
