use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZenginError {
    #[error("Failed to fetch bank data from {location}: {message}")]
    SourceUnavailable { location: String, message: String },

    #[error("Failed to decode bank data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Primary bank not found in source data: {code}")]
    PrimaryBankNotFound { code: String },

    #[error("Failed to write output to {path}: {message}")]
    SinkWrite { path: PathBuf, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ZenginError>;

impl ZenginError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SourceUnavailable { .. } => 2,
            Self::Decode(_) => 3,
            Self::PrimaryBankNotFound { .. } => 4,
            Self::SinkWrite { .. } => 5,
            Self::ConfigParse { .. } => 6,
            Self::Io(_) => 1,
        }
    }
}
