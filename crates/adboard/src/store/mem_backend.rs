use super::backend::StorageBackend;
use crate::error::{AdboardError, Result};
use crate::model::{Ad, User};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory storage backend for testing.
///
/// Uses `RwLock` so the backend can be shared across threads the same way
/// the filesystem backend is.
#[derive(Default)]
pub struct MemBackend {
    ads: RwLock<Vec<Ad>>,
    users: RwLock<Vec<User>>,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
    ad_saves: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(ads: Vec<Ad>, users: Vec<User>) -> Self {
        Self {
            ads: RwLock::new(ads),
            users: RwLock::new(users),
            ..Default::default()
        }
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of times the ad collection has been persisted.
    pub fn ad_saves(&self) -> usize {
        self.ad_saves.load(Ordering::SeqCst)
    }

    fn check_read(&self) -> Result<()> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(AdboardError::Store("Simulated read error".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(AdboardError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_ads(&self) -> Result<Vec<Ad>> {
        self.check_read()?;
        Ok(self.ads.read().clone())
    }

    fn save_ads(&self, ads: &[Ad]) -> Result<()> {
        self.check_write()?;
        *self.ads.write() = ads.to_vec();
        self.ad_saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load_users(&self) -> Result<Vec<User>> {
        self.check_read()?;
        Ok(self.users.read().clone())
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        self.check_write()?;
        *self.users.write() = users.to_vec();
        Ok(())
    }
}
