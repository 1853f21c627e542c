//! Customer record definition

use serde::{Deserialize, Serialize};

/// Customer identifier
pub type CustomerId = i32;

/// A customer record
///
/// `id` is the unique key within a customer collection. Records are plain
/// values: cloning one out of a store and mutating it has no effect on the
/// store until the clone is handed back through an explicit update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer id
    pub id: CustomerId,

    /// Display name
    pub name: String,
}

impl Customer {
    /// Create a new customer record
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Create a record whose id has not been allocated yet
    ///
    /// The repository overwrites the id when the record is added.
    pub fn unassigned(name: impl Into<String>) -> Self {
        Self::new(0, name)
    }

    /// Return a copy of this record carrying a different id
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = id;
        self
    }
}
