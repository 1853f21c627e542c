//! Core trait definitions for the repository pattern
//!
//! This module defines two seams:
//!
//! - [`DocumentStorage`]: where the backing JSON document lives
//! - [`CustomerRepository`]: the operations the HTTP layer calls
//!
//! # Examples
//!
//! ```rust
//! use grocery_core::Customer;
//! use grocery_repository::{CustomerRepository, JsonCustomerRepository, MemoryDocument};
//!
//! # fn main() -> anyhow::Result<()> {
//! let storage = MemoryDocument::with_contents(r#"{"customers":[{"id":4,"name":"Ann"}]}"#);
//! let mut repo = JsonCustomerRepository::load(storage)?;
//!
//! let created = repo.add_customer(Customer::unassigned("Ben"))?;
//! assert_eq!(created.id, 5);
//! assert!(repo.get_customer_by_id(5).is_some());
//! # Ok(())
//! # }
//! ```

use grocery_core::{Customer, CustomerId};

use crate::RepositoryResult;

/// Byte-level access to the backing document
///
/// Implementations read and overwrite the whole document at once; there is
/// no partial or incremental write.
pub trait DocumentStorage: Send + Sync {
    /// Read the full document
    fn read_document(&self) -> RepositoryResult<Vec<u8>>;

    /// Replace the full document with `contents`
    fn write_document(&mut self, contents: &[u8]) -> RepositoryResult<()>;

    /// Human-readable location, used in logs and error messages
    fn describe(&self) -> String;
}

/// Customer repository used by the HTTP layer
///
/// Mutations only touch memory; nothing reaches the backing document until
/// [`save_changes`](CustomerRepository::save_changes) is called.
///
/// # Thread Safety
///
/// Implementations hold no internal locks. Callers sharing one instance
/// across tasks must serialize mutations together with the following save.
pub trait CustomerRepository: Send + Sync {
    /// Snapshot of every customer
    fn get_all_customers(&self) -> Vec<Customer>;

    /// Look up a customer; `None` when no record has this id
    fn get_customer_by_id(&self, id: CustomerId) -> Option<Customer>;

    /// Add a new customer
    ///
    /// Any id on `customer` is replaced by the next free id. Returns the
    /// record as stored.
    fn add_customer(&mut self, customer: Customer) -> RepositoryResult<Customer>;

    /// Replace the customer that has the same id
    fn update_customer(&mut self, customer: Customer) -> RepositoryResult<()>;

    /// Remove the customer that has the same id
    fn delete_customer(&mut self, customer: &Customer) -> RepositoryResult<()>;

    /// Flush the in-memory collection to the backing document
    ///
    /// `Ok(())` means the document now matches memory. On error nothing in
    /// memory is rolled back; call
    /// [`discard_changes`](CustomerRepository::discard_changes) for that.
    fn save_changes(&mut self) -> RepositoryResult<()>;

    /// Revert memory to the last successfully saved (or loaded) collection
    fn discard_changes(&mut self);
}
