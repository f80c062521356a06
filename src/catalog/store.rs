use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::medication::MedicationRecord;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Catalog must be a JSON array of medications, found {0}")]
    NotAnArray(&'static str),

    #[error("Failed to write catalog to {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Built-in sample catalog is invalid: {0}")]
    Sample(String),
}

/// Default data file, resolved against the working directory
pub const DEFAULT_DATA_FILE: &str = "medicines.json";

/// Fallback sample, embedded at compile time (validated by build.rs)
pub const SAMPLE_CATALOG: &str = include_str!("../../catalogs/sample_medications.json");

/// How a catalog load resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Records came from the requested source
    Loaded,
    /// The source was missing or unreadable; the built-in sample was used
    Fallback { reason: String },
    /// The source exists but is not a JSON array of records; the catalog is empty
    Malformed { reason: String },
}

/// An entry that was dropped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the source array
    pub index: usize,
    /// Name of the entry, when one could be read
    pub name: Option<String>,
    pub reason: String,
}

/// Result of [`MedicationCatalog::load`]
#[derive(Debug)]
pub struct LoadOutcome {
    pub catalog: MedicationCatalog,
    pub status: LoadStatus,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadOutcome {
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        matches!(self.status, LoadStatus::Fallback { .. })
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self.status, LoadStatus::Malformed { .. })
    }

    fn malformed(reason: String) -> Self {
        Self {
            catalog: MedicationCatalog::new(),
            status: LoadStatus::Malformed { reason },
            skipped: Vec::new(),
        }
    }
}

/// Immutable, ordered collection of medications for one session
#[derive(Debug, Clone, Default)]
pub struct MedicationCatalog {
    records: Vec<MedicationRecord>,
}

impl MedicationCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records, keeping their order
    pub fn from_records(records: Vec<MedicationRecord>) -> Self {
        Self { records }
    }

    /// Build the built-in fallback sample
    pub fn sample() -> Result<Self, CatalogError> {
        let (catalog, skipped) =
            Self::parse(SAMPLE_CATALOG).map_err(|e| CatalogError::Sample(e.to_string()))?;
        if let Some(first) = skipped.first() {
            return Err(CatalogError::Sample(format!(
                "entry {} rejected: {}",
                first.index, first.reason
            )));
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    ///
    /// Never writes to disk. A missing or unreadable source yields the built-in
    /// sample with [`LoadStatus::Fallback`]; persisting it is up to the caller
    /// (see [`persist_sample`]). Content that is not a JSON array of records
    /// yields an empty catalog with [`LoadStatus::Malformed`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in sample itself cannot be parsed.
    pub fn load(path: &Path) -> Result<LoadOutcome, CatalogError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                info!(path = %path.display(), "Catalog is not valid UTF-8");
                return Ok(LoadOutcome::malformed(e.to_string()));
            }
            Err(e) => {
                info!(
                    path = %path.display(),
                    error = %e,
                    "Catalog not readable, using built-in sample"
                );
                return Ok(LoadOutcome {
                    catalog: Self::sample()?,
                    status: LoadStatus::Fallback {
                        reason: e.to_string(),
                    },
                    skipped: Vec::new(),
                });
            }
        };

        match Self::parse(&content) {
            Ok((catalog, skipped)) => {
                info!(
                    path = %path.display(),
                    medications = catalog.len(),
                    skipped = skipped.len(),
                    "Loaded catalog"
                );
                Ok(LoadOutcome {
                    catalog,
                    status: LoadStatus::Loaded,
                    skipped,
                })
            }
            Err(e) => {
                info!(path = %path.display(), error = %e, "Catalog is malformed");
                Ok(LoadOutcome::malformed(e.to_string()))
            }
        }
    }

    /// Parse a catalog from a JSON string, dropping invalid entries
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::parse(json).map(|(catalog, _)| catalog)
    }

    fn parse(json: &str) -> Result<(Self, Vec<SkippedRecord>), CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        let items = match value {
            Value::Array(items) => items,
            other => return Err(CatalogError::NotAnArray(json_kind(&other))),
        };

        let mut records = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();

        for (index, item) in items.into_iter().enumerate() {
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .map(ToString::to_string);

            match serde_json::from_value::<MedicationRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        index,
                        name = name.as_deref().unwrap_or("<unknown>"),
                        error = %e,
                        "Skipping invalid medication entry"
                    );
                    skipped.push(SkippedRecord {
                        index,
                        name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok((Self { records }, skipped))
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// All records, in source order
    pub fn records(&self) -> &[MedicationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MedicationRecord> {
        self.records.iter()
    }

    /// All names, in source order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Number of medications in catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a MedicationCatalog {
    type Item = &'a MedicationRecord;
    type IntoIter = std::slice::Iter<'a, MedicationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Write the built-in sample to `path` so later runs load it directly
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn persist_sample(path: &Path) -> Result<(), CatalogError> {
    write_atomic(path, SAMPLE_CATALOG)?;
    info!(path = %path.display(), "Wrote built-in sample catalog");
    Ok(())
}

/// Write `contents` next to `path` in a temp file, then rename it into place
///
/// # Errors
///
/// Returns an error if the temp file cannot be created, written, or renamed.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), CatalogError> {
    let write_error = |source: std::io::Error| CatalogError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Category;

    #[test]
    fn test_sample_catalog() {
        let catalog = MedicationCatalog::sample().unwrap();
        assert_eq!(catalog.len(), 4);

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Panadol", "Paracetamol", "Augmentin", "Klavox"]);

        let categories: Vec<&Category> = catalog.iter().map(|r| &r.category).collect();
        assert_eq!(
            categories,
            vec![
                &Category::PainReliever,
                &Category::PainReliever,
                &Category::Antibiotic,
                &Category::Antibiotic
            ]
        );
    }

    #[test]
    fn test_load_missing_file_uses_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicines.json");

        let outcome = MedicationCatalog::load(&path).unwrap();
        assert!(outcome.used_fallback());
        assert_eq!(outcome.catalog.len(), 4);

        // load itself never writes
        assert!(!path.exists());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicines.json");
        std::fs::write(&path, "{ not json ]").unwrap();

        let outcome = MedicationCatalog::load(&path).unwrap();
        assert!(outcome.is_malformed());
        assert!(!outcome.used_fallback());
        assert!(outcome.catalog.is_empty());
    }

    #[test]
    fn test_load_object_instead_of_array_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicines.json");
        std::fs::write(&path, r#"{"name": "Panadol"}"#).unwrap();

        let outcome = MedicationCatalog::load(&path).unwrap();
        match outcome.status {
            LoadStatus::Malformed { reason } => assert!(reason.contains("an object")),
            other => panic!("Expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicines.json");
        std::fs::write(&path, "[]").unwrap();

        let outcome = MedicationCatalog::load(&path).unwrap();
        assert_eq!(outcome.status, LoadStatus::Loaded);
        assert!(outcome.catalog.is_empty());
    }

    #[test]
    fn test_load_drops_invalid_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicines.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "Panadol", "category": "Pain reliever", "active_ingredient": "Paracetamol", "price": "2.5"},
                {"name": "Broken", "category": "Antibiotic", "active_ingredient": "X", "price": "free"},
                {"name": "NoCategory", "active_ingredient": "X", "price": 1},
                "not an object",
                {"name": "Klavox", "category": "Antibiotic", "activeIngredient": "Amoxicillin", "price": 5.8}
            ]"#,
        )
        .unwrap();

        let outcome = MedicationCatalog::load(&path).unwrap();
        assert_eq!(outcome.status, LoadStatus::Loaded);
        assert_eq!(outcome.catalog.len(), 2);

        let skipped: Vec<usize> = outcome.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 2, 3]);
        assert_eq!(outcome.skipped[0].name.as_deref(), Some("Broken"));
        assert_eq!(outcome.skipped[2].name, None);
    }

    #[test]
    fn test_persist_sample_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicines.json");

        persist_sample(&path).unwrap();
        assert!(path.exists());

        let outcome = MedicationCatalog::load(&path).unwrap();
        assert_eq!(outcome.status, LoadStatus::Loaded);
        assert_eq!(outcome.catalog.len(), 4);
    }

    #[test]
    fn test_persist_sample_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("medicines.json");

        let result = persist_sample(&path);
        assert!(matches!(result, Err(CatalogError::WriteError { .. })));
    }

    #[test]
    fn test_to_json_round_trips_through_from_json() {
        let catalog = MedicationCatalog::sample().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"active_ingredient\""));
        let reparsed = MedicationCatalog::from_json(&json).unwrap();
        assert_eq!(reparsed.records(), catalog.records());
    }

    #[test]
    fn test_from_records_keeps_order() {
        let catalog = MedicationCatalog::from_records(vec![
            MedicationRecord::new("B", "x", Category::Antibiotic, 1.0),
            MedicationRecord::new("A", "x", Category::Antibiotic, 1.0),
        ]);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
