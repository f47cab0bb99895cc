//! Flat-file JSON persistence for the student collection
//!
//! The whole collection is one pretty-printed JSON array; every write
//! rewrites the file. Reads degrade silently: a missing or unparsable file
//! yields an empty collection rather than an error.

use std::path::PathBuf;

use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use crate::error::{ApiError, Result};
use crate::model::Student;

/// Persistence layer for the full student collection
pub struct RecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read the full collection.
    ///
    /// A missing file is the empty collection. An unreadable or malformed
    /// file is logged and also degrades to the empty collection.
    pub async fn load(&self) -> Vec<Student> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read data file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&raw) {
            Ok(students) => students,
            Err(e) => {
                warn!("Malformed data file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Overwrite the data file with the full collection, pretty-printed.
    pub async fn save(&self, students: &[Student]) -> Result<()> {
        let json = serde_json::to_string_pretty(students)
            .map_err(|e| ApiError::Persistence(format!("failed to serialize students: {}", e)))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            ApiError::Persistence(format!(
                "failed to write data file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Serialize a load-mutate-save sequence against concurrent mutations.
    /// Held for the duration of the sequence; plain reads stay lock-free.
    pub async fn lock_for_write(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
