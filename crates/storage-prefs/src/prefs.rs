//! The preference store: a JSON object persisted as one file.
//!
//! Every `set`/`remove` rewrites the whole file, mirroring the
//! preference-store model the app was built around. An unparsable file is
//! treated as empty; callers that care (the to-do repository) seed sample
//! data on top.

use log::warn;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::errors::StorageError;
use taskpie_core::Result;

/// File name of the blob inside the app data directory.
pub const PREFS_FILE_NAME: &str = "prefs.json";

pub struct PreferenceStore {
    path: PathBuf,
    values: RwLock<Map<String, Value>>,
}

impl PreferenceStore {
    /// Open the store under `base_dir`, creating the directory if needed.
    ///
    /// A missing file is an empty store. An unreadable or unparsable file
    /// is logged and treated as empty; the next write replaces it.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        if !base_dir.exists() {
            fs::create_dir_all(base_dir).map_err(StorageError::from)?;
        }
        let path = base_dir.join(PREFS_FILE_NAME);

        let values = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(StorageError::from)?;
            match serde_json::from_str::<Map<String, Value>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "Preference file {} is not valid JSON ({}); starting empty",
                        path.display(),
                        e
                    );
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        Ok(PreferenceStore {
            path,
            values: RwLock::new(values),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        let values = self
            .values
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        values.insert(key.to_string(), value);
        self.flush(&values)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        if values.remove(key).is_some() {
            self.flush(&values)?;
        }
        Ok(())
    }

    fn flush(&self, values: &Map<String, Value>) -> Result<()> {
        let json = serde_json::to_string_pretty(values).map_err(StorageError::from)?;
        fs::write(&self.path, json)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}
