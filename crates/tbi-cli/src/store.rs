//! JSON-file persistence collaborator.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tbi_core::RecordStore;
use tbi_model::PersistedRecord;

/// Stores persisted records as pretty-printed JSON files, one per document.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path the record for `document_name` is written to.
    #[must_use]
    pub fn record_path(&self, document_name: &str) -> PathBuf {
        self.dir.join(format!("{document_name}.record.json"))
    }
}

impl RecordStore for JsonFileStore {
    fn store(&self, document_name: &str, record: &PersistedRecord) -> Result<()> {
        let path = self.record_path(document_name);
        write_json(&path, record)
    }
}

/// Serializes a value to a pretty-printed JSON file.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}
