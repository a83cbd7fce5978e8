use crate::error::Result;
use crate::model::{Ad, User};

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "when" (write serialization).
pub trait StorageBackend: Send + Sync {
    /// Load the full ad collection (ads.json). A missing collection is empty.
    fn load_ads(&self) -> Result<Vec<Ad>>;

    /// Replace the persisted ad collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid torn writes.
    fn save_ads(&self, ads: &[Ad]) -> Result<()>;

    /// Load the full user collection (users.json). A missing collection is empty.
    fn load_users(&self) -> Result<Vec<User>>;

    /// Replace the persisted user collection. Same atomicity rule as `save_ads`.
    fn save_users(&self, users: &[User]) -> Result<()>;
}
