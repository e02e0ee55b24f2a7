//! Key-value persistence port.
//!
//! The store mirrors a handful of state fields to a string key-value store
//! on every mutation that touches them. Persistence is strictly best-effort:
//! reads that fail for any reason surface as `None` (callers fall back to
//! defaults), and writes are silently dropped on failure. A failed write
//! never rolls back an in-memory mutation.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Best-effort string key-value storage.
pub trait KeyValueStore {
    /// Reads the raw value for `key`, or `None` if absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`. Failures are swallowed.
    fn write(&self, key: &str, value: &str);
}

/// File-backed store keeping one `<key>.json` file per key under a root
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn write(&self, key: &str, value: &str) {
        if fs::create_dir_all(&self.root).is_err() {
            return;
        }
        let _ = fs::write(self.entry_path(key), value);
    }
}

/// In-memory store for tests, with a switch to simulate write failures
/// (the quota-exceeded case).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with entries.
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: RefCell::new(entries.into_iter().collect()),
            fail_writes: Cell::new(false),
        }
    }

    /// When set, subsequent writes are dropped.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Returns a snapshot of the stored value for `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if self.fail_writes.get() {
            return;
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
