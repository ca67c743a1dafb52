//! In-memory document store for tests.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, error::Error, ports::DocumentStore};

/// Keeps encoded documents in a shared map instead of on disk.
///
/// Clones share the same storage.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use stategraph::adapters::InMemoryStore;
/// use stategraph::codec::Encoding;
/// use stategraph::ports::DocumentStore;
/// use stategraph::synthetic::{SyntheticGraph, SyntheticSpec, generate};
///
/// let store = InMemoryStore::new();
/// let graph = generate(&SyntheticSpec::graph(10, 2))?;
/// store.save(&graph, Path::new("g"), Encoding::Text)?;
/// let loaded: SyntheticGraph = store.load(Path::new("g"))?;
/// assert!(loaded.content_eq(&graph));
/// # Ok::<(), stategraph::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
    storage: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored documents.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn clear(&self) {
        self.storage().clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(path)
    }
}

impl DocumentStore for InMemoryStore {
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.storage().insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        self.storage()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::Io {
                operation: format!("load document from in-memory storage at {path:?}"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_storage() {
        let store = InMemoryStore::new();
        let other = store.clone();

        store.write_bytes(Path::new("a"), b"one").unwrap();
        assert!(other.contains(Path::new("a")));
        assert_eq!(other.read_bytes(Path::new("a")).unwrap(), b"one");
        assert_eq!(other.count(), 1);

        other.clear();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let result = InMemoryStore::new().read_bytes(Path::new("nonexistent"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_overwrite_replaces_bytes() {
        let store = InMemoryStore::new();
        store.write_bytes(Path::new("k"), b"old").unwrap();
        store.write_bytes(Path::new("k"), b"new").unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.read_bytes(Path::new("k")).unwrap(), b"new");
    }
}
