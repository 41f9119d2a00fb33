//! @acp:module "Errors"
//! @acp:summary "Error types for rules aggregation"
//! @acp:domain cli
//! @acp:layer model

use std::path::PathBuf;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, RulesError>;

/// Failures that can stop a regeneration run
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// The rules directory is missing or is not a directory
    #[error("Rules directory not found: {}", path.display())]
    RulesDirNotFound { path: PathBuf },

    /// Reading a fragment or writing the output failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Listing the rules directory failed
    #[error("Failed to list rules directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Config file could not be parsed
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl RulesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RulesError::Io {
            path: path.into(),
            source,
        }
    }
}
