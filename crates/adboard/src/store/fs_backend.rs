use super::backend::StorageBackend;
use crate::error::{AdboardError, Result};
use crate::model::{Ad, User};
use log::warn;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const ADS_FILE: &str = "ads.json";
pub const USERS_FILE: &str = "users.json";

pub struct FsBackend {
    root: PathBuf,
    unreadable_ads: Mutex<Vec<Value>>,
    unreadable_users: Mutex<Vec<Value>>,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            unreadable_ads: Mutex::new(Vec::new()),
            unreadable_users: Mutex::new(Vec::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AdboardError::Io)?;
        }
        Ok(())
    }

    /// Parses the collection record by record. A record that does not fit the
    /// model is left out of the result and parked in `unreadable`, so the next
    /// save writes it back untouched. Only a file that is not a JSON array at
    /// all is an error.
    fn read_collection<T: DeserializeOwned>(
        &self,
        file_name: &str,
        unreadable: &Mutex<Vec<Value>>,
    ) -> Result<Vec<T>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            unreadable.lock().clear();
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(AdboardError::Io)?;
        if content.trim().is_empty() {
            unreadable.lock().clear();
            return Ok(Vec::new());
        }
        let raw: Vec<Value> = serde_json::from_str(&content).map_err(AdboardError::Serialization)?;

        let mut records = Vec::with_capacity(raw.len());
        let mut skipped = Vec::new();
        for (position, value) in raw.into_iter().enumerate() {
            match T::deserialize(&value) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("skipping record {} in {}: {}", position, file_name, e);
                    skipped.push(value);
                }
            }
        }
        *unreadable.lock() = skipped;
        Ok(records)
    }

    fn write_collection<T: Serialize>(
        &self,
        file_name: &str,
        records: &[T],
        unreadable: &Mutex<Vec<Value>>,
    ) -> Result<()> {
        self.ensure_dir()?;

        let target = self.root.join(file_name);
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            out.push(serde_json::to_value(record).map_err(AdboardError::Serialization)?);
        }
        out.extend(unreadable.lock().iter().cloned());
        let content = serde_json::to_string_pretty(&out).map_err(AdboardError::Serialization)?;

        // Atomic write
        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(AdboardError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(AdboardError::Io(e));
        }

        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_ads(&self) -> Result<Vec<Ad>> {
        self.read_collection(ADS_FILE, &self.unreadable_ads)
    }

    fn save_ads(&self, ads: &[Ad]) -> Result<()> {
        self.write_collection(ADS_FILE, ads, &self.unreadable_ads)
    }

    fn load_users(&self) -> Result<Vec<User>> {
        self.read_collection(USERS_FILE, &self.unreadable_users)
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        self.write_collection(USERS_FILE, users, &self.unreadable_users)
    }
}
