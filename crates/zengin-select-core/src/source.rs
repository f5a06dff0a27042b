//! Source Loader
//!
//! Fetches the Zengin bank directory from a URL or local file, strips the
//! JavaScript module wrapper and decodes the JSON payload.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::bank::BankCollection;
use crate::error::{Result, ZenginError};

/// Default upstream location of the bank directory
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/zengin-code/zengin-js/master/lib/zengin-data.js";

const FETCH_TIMEOUT_SECS: u64 = 60;

/// `module.exports =` prefix and trailing `;`
static WRAPPER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^module\.exports\s?=\s?|;\n?$").expect("wrapper pattern is valid")
});

/// Where the raw bank directory comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// `http://` / `https://` locations are URLs, anything else is a file path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    pub fn location(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn unavailable(&self, message: impl ToString) -> ZenginError {
        ZenginError::SourceUnavailable {
            location: self.location(),
            message: message.to_string(),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

/// Blocking loader for the bank directory
///
/// Holds one HTTP client for the lifetime of the loader.
#[derive(Debug, Clone)]
pub struct SourceLoader {
    client: reqwest::blocking::Client,
}

impl SourceLoader {
    /// Create a loader with the default fetch timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| ZenginError::SourceUnavailable {
                location: DEFAULT_SOURCE_URL.to_string(),
                message: format!("failed to create HTTP client: {}", e),
            })?;
        Ok(Self::with_client(client))
    }

    /// Create a loader around a caller-supplied client
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// Fetch the raw payload
    pub fn fetch_raw(&self, source: &Source) -> Result<String> {
        match source {
            Source::Url(url) => {
                info!(url = %url, "fetching bank data");
                let response = self
                    .client
                    .get(url)
                    .send()
                    .map_err(|e| source.unavailable(e))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(source.unavailable(format!("HTTP {}", status)));
                }

                response.text().map_err(|e| source.unavailable(e))
            }
            Source::File(path) => {
                info!(path = %path.display(), "reading bank data");
                fs::read_to_string(path).map_err(|e| source.unavailable(e))
            }
        }
    }

    /// Fetch, unwrap and decode
    pub fn load(&self, source: &Source) -> Result<BankCollection> {
        let raw = self.fetch_raw(source)?;
        decode(&strip_wrapper(&raw))
    }
}

/// Remove the JavaScript wrapper around the JSON object
///
/// Plain JSON passes through unchanged.
pub fn strip_wrapper(raw: &str) -> String {
    WRAPPER_RE.replace_all(raw, "").into_owned()
}

/// Decode a JSON object of `code -> bank`
///
/// Records stay keyed by their source key, even when two records share a `code`.
pub fn decode(json: &str) -> Result<BankCollection> {
    let collection: BankCollection = serde_json::from_str(json)?;
    debug!(banks = collection.len(), "decoded bank data");
    Ok(collection)
}

/// Fetch, unwrap and decode with a fresh [`SourceLoader`]
pub fn load(source: &Source) -> Result<BankCollection> {
    SourceLoader::new()?.load(source)
}
