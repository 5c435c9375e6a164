//! # Application Service
//!
//! Forwards each store operation unmodified. No validation, business rule,
//! or transformation lives here; absence stays an explicit `Option` so the
//! HTTP boundary decides its external representation.

use std::sync::Arc;

use crate::person::Person;
use crate::store::{PersonStore, StoreResult};

/// Person application service
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
}

impl PersonService {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Every stored person.
    pub fn find_all(&self) -> StoreResult<Vec<Person>> {
        self.store.find_all()
    }

    /// The person with the given id, if present.
    pub fn find_by_id(&self, id: u64) -> StoreResult<Option<Person>> {
        self.store.find_by_id(id)
    }

    /// Insert-or-update per the store's upsert contract.
    pub fn save_or_update(&self, person: Person) -> StoreResult<Person> {
        self.store.save(person)
    }

    /// Hard delete; no-op when absent.
    pub fn delete_by_id(&self, id: u64) -> StoreResult<()> {
        self.store.delete_by_id(id)
    }
}
