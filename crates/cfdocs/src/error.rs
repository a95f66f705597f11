//! CLI error types.

use cfdocs_config::ConfigError;
use cfdocs_corpora::CorpusError;
use cfdocs_nav::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Corpus(#[from] CorpusError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
