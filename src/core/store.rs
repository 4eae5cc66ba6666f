//! Flat key-value persistence
//!
//! The storage medium is a blob store with `get`/`set` string operations.
//! The whole student directory is serialized as one JSON document under a
//! single key on every mutation; the theme preference lives under another.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::core::models::{Directory, Student};

/// Key holding the JSON-serialized array of all students.
pub const KEY_STUDENTS: &str = "cgpa_students";
/// Key holding the theme preference (`"light"` or `"dark"`).
pub const KEY_THEME: &str = "theme";
/// Key holding the id of the active student between invocations.
pub const KEY_ACTIVE: &str = "active_student";

/// Errors from the persistence boundary
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a key's backing file failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored student blob was not valid JSON
    #[error("stored records are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A string-blob store holding one value per key.
pub trait KvStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one file per key inside a data directory.
///
/// Writes go through a temp file in the same directory and are moved into
/// place, so a crash mid-write never leaves a half-written value.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut temp = NamedTempFile::new_in(&self.root)?;
        temp.write_all(value.as_bytes())?;
        temp.persist(self.key_path(key))
            .map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialize every student as one JSON document and store it.
///
/// # Errors
///
/// Returns a [`StoreError`] if serialization or the write fails.
pub fn save_students<S: KvStore>(store: &mut S, directory: &Directory) -> Result<(), StoreError> {
    let blob = serde_json::to_string(&directory.students)?;
    store.set(KEY_STUDENTS, &blob)
}

/// Load the student directory from the store.
///
/// A missing key yields an empty directory (first run). The active selection
/// is not part of the blob; callers restore it separately.
///
/// # Errors
///
/// Returns a [`StoreError`] if the stored blob exists but cannot be parsed.
pub fn load_students<S: KvStore>(store: &S) -> Result<Directory, StoreError> {
    let students: Vec<Student> = match store.get(KEY_STUDENTS) {
        Some(blob) => serde_json::from_str(&blob)?,
        None => Vec::new(),
    };
    Ok(Directory {
        students,
        active: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::CourseFields;

    fn sample_directory() -> Directory {
        let mut dir = Directory::new();
        dir.create_student("Asha", 30.0, 10).unwrap();
        let student = dir.active_student_mut().unwrap();
        student.add_course(CourseFields {
            name: "Algorithms".to_string(),
            credits: 4,
            grade_label: "A".to_string(),
            grade_points: 4.0,
            quality_points: 16.0,
        });
        dir.create_student("Ben", 0.0, 0).unwrap();
        dir
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let dir = sample_directory();

        save_students(&mut store, &dir).unwrap();
        let loaded = load_students(&store).unwrap();

        assert_eq!(loaded.students, dir.students);
        assert!(loaded.active.is_none());
    }

    #[test]
    fn test_missing_key_yields_empty_directory() {
        let store = MemoryStore::new();
        let loaded = load_students(&store).unwrap();
        assert!(loaded.students.is_empty());
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(KEY_STUDENTS, "not json").unwrap();
        assert!(load_students(&store).is_err());
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set(KEY_THEME, "light").unwrap();
        store.set(KEY_THEME, "dark").unwrap();
        assert_eq!(store.get(KEY_THEME).as_deref(), Some("dark"));
    }
}
