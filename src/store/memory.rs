use crate::error::{Result, VermanError};
use crate::store::file::DEFAULT_VERSION_FILE;
use crate::store::{VersionRecord, VersionStore};
use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory version store for testing without touching the filesystem
pub struct MemoryStore {
    path: PathBuf,
    record: RefCell<Option<VersionRecord>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        MemoryStore {
            path: PathBuf::from(DEFAULT_VERSION_FILE),
            record: RefCell::new(None),
            fail_writes: Cell::new(false),
            writes: Cell::new(0),
        }
    }

    /// Create a store that already holds a record
    pub fn with_record(record: VersionRecord) -> Self {
        let store = MemoryStore::new();
        *store.record.borrow_mut() = Some(record);
        store
    }

    /// Make every following write fail with a permission error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn record(&self) -> Option<VersionRecord> {
        *self.record.borrow()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionStore for MemoryStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.record.borrow().is_some()
    }

    fn read(&self) -> Result<VersionRecord> {
        self.record().ok_or_else(|| VermanError::StoreRead {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "no version record"),
        })
    }

    fn write(&self, record: &VersionRecord) -> Result<()> {
        if self.fail_writes.get() {
            return Err(VermanError::StoreWrite {
                path: self.path.clone(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            });
        }
        *self.record.borrow_mut() = Some(*record);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.record.borrow_mut() = None;
        Ok(())
    }
}
