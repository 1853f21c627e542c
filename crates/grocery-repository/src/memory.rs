//! In-memory document storage

use std::io;
use std::sync::{Arc, Mutex};

use crate::{error::RepositoryError, traits::DocumentStorage, RepositoryResult};

/// Document contents of a freshly created, empty store
pub const EMPTY_DOCUMENT: &str = r#"{"customers":[]}"#;

/// A document held in a shared in-memory buffer
///
/// Clones share the same buffer, so a test can keep one handle to inspect
/// what the store saved through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    contents: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryDocument {
    /// Create a storage with no document; loading from it fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage holding `contents`
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// Create a storage holding an empty customer document
    pub fn empty_document() -> Self {
        Self::with_contents(EMPTY_DOCUMENT)
    }

    /// Current contents
    ///
    /// Fails the same way [`read_document`](DocumentStorage::read_document)
    /// does: `Io` when no document exists, `LockPoisoned` when a writer
    /// panicked while holding the buffer.
    pub fn contents(&self) -> RepositoryResult<Vec<u8>> {
        self.read_document()
    }

    /// Current contents decoded as UTF-8
    pub fn contents_string(&self) -> RepositoryResult<String> {
        String::from_utf8(self.contents()?)
            .map_err(|e| RepositoryError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

impl DocumentStorage for MemoryDocument {
    fn read_document(&self) -> RepositoryResult<Vec<u8>> {
        let guard = self
            .contents
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        guard.clone().ok_or_else(|| {
            RepositoryError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no document in memory",
            ))
        })
    }

    fn write_document(&mut self, contents: &[u8]) -> RepositoryResult<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        *guard = Some(contents.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
