use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{Error, InternalResult};

/// How the token listing is rendered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// `line:column<TAB>kind<TAB>literal`, one token per line
    #[default]
    Text,
    /// JSON array of token objects
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Also list the end-of-input token.
    #[serde(default = "default_include_eof")]
    pub include_eof: bool,

    /// Stop listing at the first illegal character.
    #[serde(default = "default_stop_on_illegal")]
    pub stop_on_illegal: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            include_eof: default_include_eof(),
            stop_on_illegal: default_stop_on_illegal(),
        }
    }
}

/// Settings given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOverrides {
    pub format: Option<OutputFormat>,
    pub include_eof: Option<bool>,
    pub stop_on_illegal: Option<bool>,
}

impl ListingConfig {
    /// Reads a listing config from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&text)
            .map_err(|e| Error::Config(format!("{} in {}", e, path.display())))
    }

    pub fn from_json(text: &str) -> InternalResult<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(format!("Invalid listing config: {}", e)))
    }

    /// Applies command line settings on top of this config, in both directions.
    pub fn with_overrides(self, overrides: &ListingOverrides) -> Self {
        Self {
            format: overrides.format.unwrap_or(self.format),
            include_eof: overrides.include_eof.unwrap_or(self.include_eof),
            stop_on_illegal: overrides.stop_on_illegal.unwrap_or(self.stop_on_illegal),
        }
    }
}

fn default_include_eof() -> bool {
    false
}

fn default_stop_on_illegal() -> bool {
    false
}
