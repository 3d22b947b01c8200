//! Employee store
//!
//! `employees.json` is a flat JSON array. Saving reads the whole array,
//! appends one record and rewrites the file.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::file_io::{read_json_if_exists, write_json_atomic};
use crate::config::InsightsPaths;
use crate::error::InsightsResult;
use crate::models::EmployeeRecord;

/// Append-only store of employee records
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the store
    ///
    /// Existing entries are carried over untouched, whatever their shape.
    /// A store that is not a JSON array is never overwritten.
    pub fn save_record(&self, record: &EmployeeRecord) -> InsightsResult<()> {
        let mut entries: Vec<Value> = read_json_if_exists(&self.path)?.unwrap_or_default();

        entries.push(serde_json::to_value(record)?);

        write_json_atomic(&self.path, &entries)
    }

    /// Load every stored record
    pub fn load_records(&self) -> InsightsResult<Vec<EmployeeRecord>> {
        let records: Option<Vec<EmployeeRecord>> = read_json_if_exists(&self.path)?;
        Ok(records.unwrap_or_default())
    }
}

impl From<&InsightsPaths> for RecordStore {
    fn from(paths: &InsightsPaths) -> Self {
        Self::new(paths.store_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (RecordStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("employees.json"));
        (store, temp_dir)
    }

    #[test]
    fn test_save_creates_store() {
        let (store, _temp) = create_test_store();
        assert!(!store.path().exists());

        store
            .save_record(&EmployeeRecord::new("Jane Doe", "Engineering", 3, 5000.0))
            .unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load_records().unwrap().len(), 1);
    }

    #[test]
    fn test_round_trip_last_record() {
        let (store, _temp) = create_test_store();
        let first = EmployeeRecord::new("Jane Doe", "Engineering", 3, 5000.0);
        let second = EmployeeRecord::new("John Roe", "Sales", 7, 4321.5);

        store.save_record(&first).unwrap();
        store.save_record(&second).unwrap();

        let records = store.load_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], first);
        assert_eq!(records.last(), Some(&second));
    }

    #[test]
    fn test_store_layout() {
        let (store, _temp) = create_test_store();
        store
            .save_record(&EmployeeRecord::new("Jane", "HR", 1, 5000.0))
            .unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.starts_with("[\n    {\n        \"name\": \"Jane\","));
        assert!(contents.contains("\"annual_salary\": 60000.0"));
    }

    #[test]
    fn test_foreign_entries_are_preserved() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), r#"[{"legacy": true, "note": "kept"}]"#).unwrap();

        store
            .save_record(&EmployeeRecord::new("Jane", "HR", 1, 100.0))
            .unwrap();

        let entries: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["note"], "kept");
        assert_eq!(entries[1]["name"], "Jane");
    }

    #[test]
    fn test_corrupt_store_fails_and_is_untouched() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "{ this is not json").unwrap();

        let err = store
            .save_record(&EmployeeRecord::new("Jane", "HR", 1, 100.0))
            .unwrap_err();

        assert!(err.is_store_parse());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ this is not json");
    }

    #[test]
    fn test_non_array_store_fails() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), r#"{"name": "not a list"}"#).unwrap();

        let err = store
            .save_record(&EmployeeRecord::new("Jane", "HR", 1, 100.0))
            .unwrap_err();
        assert!(err.is_store_parse());
    }

    #[test]
    fn test_empty_file_fails() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "").unwrap();

        let err = store.load_records().unwrap_err();
        assert!(err.is_store_parse());
    }
}
