//! Customer storage layer for the grocery store backend
//!
//! This crate keeps the authoritative customer collection in memory and
//! persists it as a single JSON document:
//!
//! ```json
//! { "customers": [ { "id": 1, "name": "Alice" } ] }
//! ```
//!
//! # Features
//!
//! - **CustomerStore**: owns the collection, enforces key uniqueness and
//!   existence, loads from and saves to a [`DocumentStorage`]
//! - **JsonCustomerRepository**: allocates ids and forwards to the store
//! - **Storage backends**: a file on disk or an in-memory buffer
//!
//! # Quick Start
//!
//! ```no_run
//! use grocery_core::Customer;
//! use grocery_repository::{CustomerRepository, FileDocument, JsonCustomerRepository};
//!
//! fn main() -> anyhow::Result<()> {
//!     let storage = FileDocument::new("database.json")?;
//!     let mut repo = JsonCustomerRepository::load(storage)?;
//!
//!     // Id is allocated by the repository
//!     let created = repo.add_customer(Customer::unassigned("Alice"))?;
//!     repo.save_changes()?;
//!
//!     println!("Created customer {}", created.id);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │        HTTP layer (grocery-server)     │
//! └──────────────┬─────────────────────────┘
//!                │ CustomerRepository trait
//!                ↓
//! ┌────────────────────────────────────────┐
//! │   JsonCustomerRepository (id = max+1)  │
//! └──────────────┬─────────────────────────┘
//!                ↓
//! ┌────────────────────────────────────────┐
//! │   CustomerStore (add/update/delete)    │
//! └──────────────┬─────────────────────────┘
//!                │ DocumentStorage trait
//!       ┌────────┴────────┐
//!       ↓                 ↓
//! ┌──────────────┐  ┌──────────────────┐
//! │ FileDocument │  │ MemoryDocument   │
//! └──────────────┘  └──────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod file_system;
pub mod memory;
pub mod repository;
pub mod store;
pub mod traits;

// Re-exports - Configuration
pub use config::{StoreConfig, StoreSource};

// Re-exports - Error
pub use error::{require, RepositoryError, RepositoryResult};

// Re-exports - Storage
pub use file_system::FileDocument;
pub use memory::MemoryDocument;
pub use store::{CustomerDocument, CustomerStore};

// Re-exports - Repository
pub use repository::JsonCustomerRepository;
pub use traits::*;
