//! In-memory row table shared by the store implementations.
//!
//! Holds the rows keyed by id plus the id allocation counter. Both store
//! implementations guard a `Table` behind an `RwLock`; this type itself is
//! single-threaded and lock-free.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::person::Person;

use super::errors::{StoreError, StoreResult};

/// Row table keyed by id.
///
/// The counter stays ahead of every id present in the table, so an explicit
/// id upsert never causes a later insert to collide. The counter saturates
/// at `u64::MAX`; once that id is occupied no fresh id can be minted and
/// id-less inserts fail with `IdSpaceExhausted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    next_id: u64,
    rows: BTreeMap<u64, Person>,
}

impl Table {
    /// Create an empty table. Ids are assigned from 1.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// All rows in id order.
    pub fn all(&self) -> Vec<Person> {
        self.rows.values().cloned().collect()
    }

    /// Row with the given id, if present.
    pub fn get(&self, id: u64) -> Option<Person> {
        self.rows.get(&id).cloned()
    }

    /// Insert-or-update. An unset id gets the next assigned one; a set id
    /// overwrites in place (or inserts at that id when absent). Returns the
    /// persisted row.
    pub fn upsert(&mut self, mut person: Person) -> StoreResult<Person> {
        let id = match person.id {
            Some(id) => id,
            None => {
                let id = self.next_id;
                // Only reachable once the counter has saturated and the
                // sentinel id is taken; assigning it again would silently
                // overwrite that row.
                if self.rows.contains_key(&id) {
                    return Err(StoreError::IdSpaceExhausted);
                }
                person.id = Some(id);
                id
            }
        };

        if id >= self.next_id {
            self.next_id = id.saturating_add(1);
        }

        self.rows.insert(id, person.clone());
        Ok(person)
    }

    /// Remove the row with the given id. No-op when absent.
    pub fn remove(&mut self, id: u64) {
        self.rows.remove(&id);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows exist.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_assigns_sequential_ids() {
        let mut table = Table::new();

        let a = table.upsert(Person::new("a", "x", "1")).unwrap();
        let b = table.upsert(Person::new("b", "y", "2")).unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn test_upsert_with_explicit_id_advances_counter() {
        let mut table = Table::new();

        table.upsert(Person::with_id(7, "a", "x", "1")).unwrap();
        let next = table.upsert(Person::new("b", "y", "2")).unwrap();

        assert_eq!(next.id, Some(8));
    }

    #[test]
    fn test_upsert_overwrites_in_place() {
        let mut table = Table::new();

        let saved = table.upsert(Person::new("a", "x", "1")).unwrap();
        let id = saved.id.unwrap();

        table.upsert(Person::with_id(id, "a", "RABAT", "1")).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(id).unwrap().city, "RABAT");
    }

    #[test]
    fn test_upsert_at_max_id_saturates_counter() {
        let mut table = Table::new();

        let saved = table
            .upsert(Person::with_id(u64::MAX, "a", "x", "1"))
            .unwrap();
        assert_eq!(saved.id, Some(u64::MAX));

        // The counter is saturated and the sentinel id is taken; minting a
        // fresh id must fail rather than overwrite the existing row.
        let result = table.upsert(Person::new("b", "y", "2"));
        assert!(matches!(result, Err(StoreError::IdSpaceExhausted)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(u64::MAX).unwrap().name, "a");
    }

    #[test]
    fn test_upsert_below_max_id_still_mints() {
        let mut table = Table::new();

        table
            .upsert(Person::with_id(u64::MAX - 1, "a", "x", "1"))
            .unwrap();

        // Counter saturates at MAX but that slot is free.
        let next = table.upsert(Person::new("b", "y", "2")).unwrap();
        assert_eq!(next.id, Some(u64::MAX));
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut table = Table::new();
        table.remove(42);
        assert!(table.is_empty());
    }

    #[test]
    fn test_all_in_id_order() {
        let mut table = Table::new();
        table.upsert(Person::with_id(5, "e", "x", "1")).unwrap();
        table.upsert(Person::with_id(2, "b", "y", "2")).unwrap();

        let ids: Vec<_> = table.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(2), Some(5)]);
    }
}
