use std::path::PathBuf;

/// Error returned when a navigation feed cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Feed file could not be read.
    #[error("Failed to read navigation feed {}: {source}", .path.display())]
    Io {
        /// Feed path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Feed is not valid `NavSection[]` JSON.
    #[error("Invalid navigation feed: {0}")]
    Parse(#[from] serde_json::Error),
}
