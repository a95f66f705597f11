use serde::{Deserialize, Serialize};

/// One catalog entry describing an annotated-text corpus.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Corpus identifier, unique within a dataset.
    pub name: String,
    /// Primary language of the text.
    pub language: String,
    /// Broad category (Biblical, Literary, ...).
    pub category: String,
    /// Free-form dating of the source material.
    pub period: String,
    /// Short description.
    pub description: String,
    /// Repository URL.
    pub repository: String,
    /// Human-readable download size, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}
