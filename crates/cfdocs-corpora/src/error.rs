use std::path::PathBuf;

/// Error returned when a corpus dataset cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Dataset file could not be read.
    #[error("Failed to read corpus dataset {}: {source}", .path.display())]
    Io {
        /// Dataset path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// JSON parse error.
    #[error("Invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parse error.
    #[error("Invalid corpus YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension is neither JSON nor YAML.
    #[error("Unsupported corpus dataset format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Two records share a name.
    #[error("Duplicate corpus name: {0}")]
    DuplicateName(String),
}
