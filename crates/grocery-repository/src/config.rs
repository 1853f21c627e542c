//! Store configuration types
//!
//! This module provides configuration for where the customer document
//! lives (file system or memory) and opens a repository from it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    traits::CustomerRepository, FileDocument, JsonCustomerRepository, MemoryDocument,
    RepositoryResult,
};

/// Store source type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreSource {
    /// JSON document on disk
    FileSystem,
    /// Empty in-memory document (for testing)
    Memory,
}

impl Default for StoreSource {
    fn default() -> Self {
        Self::FileSystem
    }
}

fn default_store_path() -> String {
    "database.json".to_string()
}

/// Store configuration
///
/// # Examples
///
/// ```rust
/// use grocery_repository::{StoreConfig, StoreSource};
///
/// // JSON document on disk
/// let config = StoreConfig::file_system("data/customers.json");
/// assert_eq!(config.source, StoreSource::FileSystem);
///
/// // In-memory document (for testing)
/// let config = StoreConfig::memory();
/// assert_eq!(config.source, StoreSource::Memory);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Where the document lives
    #[serde(default)]
    pub source: StoreSource,

    /// Document path (used by the FileSystem source)
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            source: StoreSource::default(),
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    /// Create a file system store configuration
    pub fn file_system(path: impl Into<String>) -> Self {
        Self {
            source: StoreSource::FileSystem,
            path: path.into(),
        }
    }

    /// Create an in-memory store configuration
    pub fn memory() -> Self {
        Self {
            source: StoreSource::Memory,
            path: default_store_path(),
        }
    }

    /// Load the configured document and wrap it in a repository
    ///
    /// Fails if the document cannot be loaded; there is no fallback to an
    /// empty collection for the FileSystem source.
    pub fn open(&self) -> RepositoryResult<Box<dyn CustomerRepository>> {
        match self.source {
            StoreSource::FileSystem => {
                let storage = FileDocument::new(&self.path)?;
                info!("Opening customer document {}", storage.path().display());
                Ok(Box::new(JsonCustomerRepository::load(storage)?))
            }
            StoreSource::Memory => {
                info!("Opening empty in-memory customer document");
                Ok(Box::new(JsonCustomerRepository::load(
                    MemoryDocument::empty_document(),
                )?))
            }
        }
    }
}
