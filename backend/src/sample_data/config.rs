//! Sample data configuration loaded via OrthoConfig.

use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// How seeded records are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One compact JSON object per line.
    #[default]
    JsonLines,
    /// A single indented JSON array.
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = SampleDataSettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::JsonLines),
            "pretty" => Ok(Self::Pretty),
            _ => Err(SampleDataSettingsError::UnknownFormat {
                value: value.to_owned(),
            }),
        }
    }
}

/// Errors raised while interpreting [`SampleDataSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleDataSettingsError {
    /// The configured output format is not recognised.
    #[error("unknown output format `{value}`; expected `json` or `pretty`")]
    UnknownFormat { value: String },
}

/// Configuration values controlling sample record seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USR_SAMPLE_DATA")]
pub struct SampleDataSettings {
    /// Seed the sample records on startup; unset means on.
    pub enabled: Option<bool>,
    /// Output format name: `json` (default) or `pretty`.
    pub format: Option<String>,
}

impl SampleDataSettings {
    /// Whether seeding runs, defaulting to on when unset.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Parse the configured output format, falling back to JSON lines.
    ///
    /// # Errors
    ///
    /// Returns [`SampleDataSettingsError::UnknownFormat`] for unrecognised
    /// names.
    pub fn output_format(&self) -> Result<OutputFormat, SampleDataSettingsError> {
        self.format
            .as_deref()
            .map_or(Ok(OutputFormat::default()), str::parse)
    }
}
