//! # Persistence Gateway
//!
//! CRUD primitives over the Person table. `PersonStore` is the seam the
//! service layer depends on; implementations are injected so tests can
//! substitute the in-memory store for the file-backed one.

mod errors;
mod file;
mod memory;
mod table;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::person::Person;

/// Persistence gateway trait for Person rows
pub trait PersonStore: Send + Sync {
    /// Every stored row in id order; empty when none exist.
    fn find_all(&self) -> StoreResult<Vec<Person>>;

    /// The row with the given id. Absence is a normal result, not an error.
    fn find_by_id(&self, id: u64) -> StoreResult<Option<Person>>;

    /// Insert-or-update. An unset id inserts with a newly assigned id; a set
    /// id overwrites the existing row (or inserts at that explicit id when
    /// none exists). Returns the persisted state.
    fn save(&self, person: Person) -> StoreResult<Person>;

    /// Remove the row with the given id. No-op (not an error) when absent.
    fn delete_by_id(&self, id: u64) -> StoreResult<()>;
}
