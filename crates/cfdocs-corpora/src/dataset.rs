//! Read-only corpus record set.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog;
use crate::error::CorpusError;
use crate::record::CorpusRecord;

/// Static, in-memory list of corpus records.
///
/// Records keep their source order; lookups by name go through an index.
#[derive(Clone, Debug, Default)]
pub struct CorpusDataset {
    records: Vec<CorpusRecord>,
    name_index: HashMap<String, usize>,
}

impl CorpusDataset {
    /// The catalog bundled with the site.
    #[must_use]
    pub fn builtin() -> Self {
        Self::indexed(catalog::records())
    }

    /// Build a dataset, rejecting duplicate names.
    pub fn from_records(records: Vec<CorpusRecord>) -> Result<Self, CorpusError> {
        let mut seen = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if seen.insert(record.name.as_str(), i).is_some() {
                return Err(CorpusError::DuplicateName(record.name.clone()));
            }
        }
        Ok(Self::indexed(records))
    }

    /// Load records from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<CorpusRecord> = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
            _ => return Err(CorpusError::UnsupportedFormat(path.to_path_buf())),
        };

        let dataset = Self::from_records(records)?;
        tracing::debug!(path = %path.display(), records = dataset.len(), "Loaded corpus dataset");
        Ok(dataset)
    }

    fn indexed(records: Vec<CorpusRecord>) -> Self {
        let name_index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.name.clone(), i))
            .collect();
        Self {
            records,
            name_index,
        }
    }

    /// All records in source order.
    #[must_use]
    pub fn records(&self) -> &[CorpusRecord] {
        &self.records
    }

    /// Look up a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CorpusRecord> {
        self.name_index.get(name).map(|&i| &self.records[i])
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
