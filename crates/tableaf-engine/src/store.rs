//! Snapshot Store
//!
//! Key-value persistence for the JSON snapshot of the current tree.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Key-value store holding serialized snapshots
pub trait SnapshotStore {
    /// Store `snapshot` under `key`, replacing any previous value
    fn persist(&mut self, key: &str, snapshot: &str) -> io::Result<()>;

    /// Read back the value stored under `key`, if any
    fn retrieve(&self, key: &str) -> io::Result<Option<String>>;
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn persist(&mut self, key: &str, snapshot: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), snapshot.to_string());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }
}

/// Store writing one `<key>.json` file per key into a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn persist(&mut self, key: &str, snapshot: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), snapshot)
    }

    fn retrieve(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
