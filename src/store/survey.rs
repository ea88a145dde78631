use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::JournalError;
use crate::models::SurveyEntry;

/// JSON-file backed store for per-trade survey annotations.
///
/// The backing file holds a flat, pretty-printed array of entries and is
/// exclusively owned by this store. Every upsert rewrites the whole file:
/// the new array goes to a sibling temp file which is then renamed over the
/// original, so a failed write leaves the previous contents observable and
/// whole. The read-modify-write sequence runs under an internal mutex to
/// close the lost-update race between concurrent writers in one process.
pub struct SurveyStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SurveyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every persisted entry. A missing, unreadable, or corrupt backing
    /// file means "no survey data yet" and yields an empty list, never an
    /// error.
    pub fn read_all(&self) -> Vec<SurveyEntry> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Survey file {:?} not readable: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&data) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Survey file {:?} is not a valid entry array: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Insert `entry`, or replace the stored entry with the same id in place.
    /// Position of a replaced entry is preserved; new entries append.
    pub fn upsert(&self, entry: SurveyEntry) -> Result<(), JournalError> {
        let _guard = self.write_lock.lock().map_err(|_| JournalError::LockPoisoned)?;

        let mut entries = self.read_all();
        match entries.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }

        self.save(&entries)
    }

    fn save(&self, entries: &[SurveyEntry]) -> Result<(), JournalError> {
        let data = serde_json::to_vec_pretty(entries).map_err(|e| {
            JournalError::StoreWriteFailure(format!("Failed to serialize entries: {}", e))
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    JournalError::StoreWriteFailure(format!("Failed to create directory: {}", e))
                })?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &data).map_err(|e| {
            JournalError::StoreWriteFailure(format!(
                "Failed to write {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            JournalError::StoreWriteFailure(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        log::info!("Persisted {} survey entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}
