use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZenginError};
use crate::primary::PrimaryBanks;
use crate::source::{Source, DEFAULT_SOURCE_URL};

pub const CONFIG_FILE: &str = "zengin-select.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "ZENGIN_SELECT_CONFIG";

/// Default config template with rich comments
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# zengin-select configuration file
# Location: ./zengin-select.toml (or $ZENGIN_SELECT_CONFIG)

[source]
# URL (http/https) or local file path of zengin-data.js
location = "https://raw.githubusercontent.com/zengin-code/zengin-js/master/lib/zengin-data.js"

[primary]
# Bank codes listed as primary banks, in display order
codes = ["0001", "0005", "0009", "0010", "0017", "0033", "0036", "9900"]
# Appended to the name of each primary bank
suffix = "銀行"

[output]
# Pretty-print JSON output
pretty = false
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub primary: PrimaryBanks,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Source-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceConfig {
    /// URL or file path
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
        }
    }
}

impl SourceConfig {
    pub fn source(&self) -> Source {
        Source::parse(&self.location)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Load config from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| ZenginError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Resolve the config file path
    ///
    /// `$ZENGIN_SELECT_CONFIG` if set, otherwise `zengin-select.toml` in `dir`.
    pub fn path(dir: &Path) -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => dir.join(CONFIG_FILE),
        }
    }
}
