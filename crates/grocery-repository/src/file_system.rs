//! File system document storage

use path_absolutize::Absolutize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{error::RepositoryError, traits::DocumentStorage, RepositoryResult};

/// A JSON document stored in a single file
///
/// The file is read whole on load and rewritten whole on save.
#[derive(Debug, Clone)]
pub struct FileDocument {
    /// Absolute path of the document
    path: PathBuf,
}

impl FileDocument {
    /// Create a file document handle
    ///
    /// The file does not need to exist yet; a missing file is reported when
    /// the store is loaded.
    ///
    /// # Example
    /// ```no_run
    /// use grocery_repository::FileDocument;
    ///
    /// let storage = FileDocument::new("database.json").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(RepositoryError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        let abs_path = path
            .absolutize()
            .map_err(|_| RepositoryError::InvalidPath {
                path: path.to_path_buf(),
            })?
            .to_path_buf();

        Ok(Self { path: abs_path })
    }

    /// Absolute path of the document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStorage for FileDocument {
    fn read_document(&self) -> RepositoryResult<Vec<u8>> {
        debug!("Reading document from {}", self.path.display());
        Ok(fs::read(&self.path)?)
    }

    fn write_document(&mut self, contents: &[u8]) -> RepositoryResult<()> {
        debug!("Writing {} bytes to {}", contents.len(), self.path.display());
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
