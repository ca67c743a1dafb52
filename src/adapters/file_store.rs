//! Filesystem implementation of the document store.

use std::{fs, path::Path};

use crate::{Result, error::Error, ports::DocumentStore};

/// Stores each document as a single file.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use stategraph::adapters::FileStore;
/// use stategraph::ports::DocumentStore;
/// use stategraph::synthetic::SyntheticTree;
///
/// let tree: SyntheticTree = FileStore::new().load(Path::new("tree.json"))?;
/// println!("{} nodes", tree.node_count());
/// # Ok::<(), stategraph::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for FileStore {
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes).map_err(|source| Error::Io {
            operation: format!("write file {path:?}"),
            source,
        })
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| Error::Io {
            operation: format!("read file {path:?}"),
            source,
        })
    }
}
