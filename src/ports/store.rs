//! Storage port for serialized graphs and trees.

use std::path::Path;

use crate::{
    Result,
    codec::{self, Document, DocumentInfo, Encoding},
};

/// Port for persisting encoded documents.
///
/// Implementors only move bytes; framing and encoding live in [`codec`], so
/// every store reads back whatever any other store wrote.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use stategraph::adapters::FileStore;
/// use stategraph::codec::Encoding;
/// use stategraph::ports::DocumentStore;
/// use stategraph::tictactoe::{Traversal, enumerate_states};
///
/// let graph = enumerate_states(Traversal::BreadthFirst)?;
/// let store = FileStore::new();
/// store.save(&graph, Path::new("states.sgrf"), Encoding::Binary { compressed: true })?;
/// # Ok::<(), stategraph::Error>(())
/// ```
pub trait DocumentStore {
    /// Store `bytes` at `path`, replacing anything already there.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the location cannot be written.
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()>;

    /// Fetch the bytes stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if nothing is stored there or it cannot be read.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Encode `doc` and store it.
    fn save<D: Document>(&self, doc: &D, path: &Path, encoding: Encoding) -> Result<()> {
        let bytes = codec::encode(doc, encoding)?;
        self.write_bytes(path, &bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Load and decode a document, whichever encoding it was saved with.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Format`] if the stored data is malformed or
    /// holds a different kind of document.
    fn load<D: Document>(&self, path: &Path) -> Result<D> {
        let bytes = self.read_bytes(path)?;
        codec::decode(&bytes)
    }

    /// Read the envelope of a stored document without decoding its body.
    fn peek(&self, path: &Path) -> Result<DocumentInfo> {
        let bytes = self.read_bytes(path)?;
        codec::peek(&bytes)
    }
}
