use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Error types shared by every demonstration
// =============================================================================

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("failed to write to output: {0}")]
    Io(#[from] io::Error),

    #[error("offloaded work did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl ShowcaseError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
