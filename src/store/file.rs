//! # File-Backed Store
//!
//! Durable store implementation. The whole table is rewritten to a snapshot
//! file after every mutation:
//!
//! - 8 ASCII hex chars of CRC32 (IEEE) over the payload
//! - a newline
//! - the JSON payload (row table)
//!
//! Every load validates the checksum; a mismatch or malformed layout aborts
//! the open. Writes go to a `.tmp` sibling then rename, so readers never
//! observe a half-written snapshot.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crc32fast::Hasher;

use crate::person::Person;

use super::errors::{StoreError, StoreResult};
use super::table::Table;
use super::PersonStore;

/// Person store persisted to a checksummed snapshot file
pub struct FileStore {
    path: PathBuf,
    table: RwLock<Table>,
}

impl FileStore {
    /// Open a file store. A missing snapshot means an empty table; a present
    /// one is loaded and checksum-verified.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let table = if path.exists() {
            load_snapshot(&path)?
        } else {
            Table::new()
        };

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    /// Persist the staged table, then commit it to memory. Called with the
    /// write lock held. A failed write leaves the in-memory table untouched,
    /// so memory and snapshot never diverge.
    fn commit(&self, table: &mut Table, staged: Table) -> StoreResult<()> {
        write_snapshot(&self.path, &staged)?;
        *table = staged;
        Ok(())
    }
}

fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

fn load_snapshot(path: &Path) -> StoreResult<Table> {
    let content = fs::read_to_string(path)?;

    let (header, payload) = content
        .split_once('\n')
        .ok_or_else(|| StoreError::Corrupted("missing checksum header".to_string()))?;

    let expected = u32::from_str_radix(header.trim(), 16)
        .map_err(|_| StoreError::Corrupted(format!("invalid checksum header '{}'", header)))?;

    let actual = compute_checksum(payload.as_bytes());
    if actual != expected {
        return Err(StoreError::Corrupted(format!(
            "checksum mismatch: expected {:08x}, got {:08x}",
            expected, actual
        )));
    }

    let table: Table = serde_json::from_str(payload)?;
    Ok(table)
}

fn write_snapshot(path: &Path, table: &Table) -> StoreResult<()> {
    let payload = serde_json::to_string(table)?;
    let checksum = compute_checksum(payload.as_bytes());
    let content = format!("{:08x}\n{}", checksum, payload);

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;

    Ok(())
}

impl PersonStore for FileStore {
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
        let mut staged = table.clone();
        let saved = staged.upsert(person)?;
        self.commit(&mut table, staged)?;
        Ok(saved)
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        let mut staged = table.clone();
        staged.remove(id);
        self.commit(&mut table, staged)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("persons.db")).unwrap();
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("persons.db");

        let store = FileStore::open(&path).unwrap();
        store.save(Person::new("a", "x", "1")).unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        // Header line is the checksum, payload follows.
        assert_eq!(content.lines().next().unwrap().len(), 8);
    }

    #[test]
    fn test_checksum_detects_corruption() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("persons.db");

        let store = FileStore::open(&path).unwrap();
        store.save(Person::new("a", "x", "1")).unwrap();
        drop(store);

        // Flip a payload byte.
        let mut content = fs::read_to_string(&path).unwrap();
        content.push(' ');
        fs::write(&path, content).unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupted(_))));
    }

    #[test]
    fn test_failed_write_keeps_table_unchanged() {
        let dir = TempDir::new().unwrap();
        // Parent directory never exists, so every snapshot write fails.
        let path = dir.path().join("missing").join("persons.db");

        let store = FileStore::open(&path).unwrap();
        let result = store.save(Person::new("a", "x", "1"));

        assert!(result.is_err());
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_header_is_corrupted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("persons.db");
        fs::write(&path, "no newline here").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupted(_))));
    }
}
