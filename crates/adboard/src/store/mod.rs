//! # Storage Layer
//!
//! This module defines the storage abstraction for adboard. The [`DataStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## Two Collections, One Writer Each
//!
//! The store owns two logical collections, **Ads** and **Users**. Both are small and
//! are always read and written whole:
//!
//! - **Reads** return a fresh, independent snapshot. Callers may mutate it freely;
//!   nothing leaks back into the store.
//! - **Writes** fully replace the persisted collection, atomically.
//!
//! Read-whole/write-whole on its own loses updates when two callers interleave
//! their load → mutate → save sequences (two concurrent detail fetches would each
//! add one view to the same starting count). Every mutation therefore goes through
//! [`DataStore::update_ads`] / [`DataStore::update_users`], which hold that
//! collection's writer lock across the whole sequence.
//!
//! ## Layering
//!
//! - [`backend::StorageBackend`]: raw I/O (the "how").
//! - [`record_store::RecordStore`]: write serialization on top of any backend.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production backend, one JSON array per collection.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── ads.json        # Ad collection, store order = insertion order
//! ├── users.json      # User collection
//! └── adboard.toml    # Optional configuration
//! ```

use crate::error::Result;
use crate::model::{Ad, User};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

/// Abstract interface for ad and user storage.
pub trait DataStore: Send + Sync {
    /// Snapshot of all ads, in store order.
    fn ads(&self) -> Result<Vec<Ad>>;

    /// Snapshot of all users.
    fn users(&self) -> Result<Vec<User>>;

    /// Run `f` against the current ad collection while holding the ads writer lock.
    /// The collection is persisted only when `f` returns `Ok`.
    fn update_ads<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Ad>) -> Result<T>;

    /// Same contract as [`DataStore::update_ads`], for users.
    fn update_users<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<User>) -> Result<T>;
}

pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use record_store::RecordStore;

/// Production store: JSON files on disk.
pub type FileStore = RecordStore<FsBackend>;

/// Test store: everything in memory.
pub type InMemoryStore = RecordStore<MemBackend>;
