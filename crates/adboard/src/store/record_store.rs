use super::backend::StorageBackend;
use super::DataStore;
use crate::error::Result;
use crate::model::{Ad, User};
use parking_lot::Mutex;

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    ads_writer: Mutex<()>,
    users_writer: Mutex<()>,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            ads_writer: Mutex::new(()),
            users_writer: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn ads(&self) -> Result<Vec<Ad>> {
        self.backend.load_ads()
    }

    fn users(&self) -> Result<Vec<User>> {
        self.backend.load_users()
    }

    fn update_ads<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Ad>) -> Result<T>,
    {
        let _guard = self.ads_writer.lock();
        let mut ads = self.backend.load_ads()?;
        let out = f(&mut ads)?;
        self.backend.save_ads(&ads)?;
        Ok(out)
    }

    fn update_users<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<User>) -> Result<T>,
    {
        let _guard = self.users_writer.lock();
        let mut users = self.backend.load_users()?;
        let out = f(&mut users)?;
        self.backend.save_users(&users)?;
        Ok(out)
    }
}
