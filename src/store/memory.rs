//! # In-Memory Store
//!
//! Default store implementation. Also the substitute used by tests in place
//! of the file-backed store.

use std::sync::RwLock;

use crate::person::Person;

use super::errors::{StoreError, StoreResult};
use super::table::Table;
use super::PersonStore;

/// In-memory Person store
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }

    /// Create a store pre-populated with the given rows. Explicit ids are
    /// kept; the id counter advances past the largest one.
    pub fn seeded(persons: Vec<Person>) -> Self {
        let mut table = Table::new();
        for person in persons {
            // Upsert only fails when minting a fresh id from a saturated
            // counter; seeding cannot reach that state from empty.
            let _ = table.upsert(person);
        }
        Self {
            table: RwLock::new(table),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonStore for MemoryStore {
    fn find_all(&self) -> StoreResult<Vec<Person>> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(table.all())
    }

    fn find_by_id(&self, id: u64) -> StoreResult<Option<Person>> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(table.get(id))
    }

    fn save(&self, person: Person) -> StoreResult<Person> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        table.upsert(person)
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        table.remove(id);
        Ok(())
    }
}
