//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use grocery_core::{Customer, CustomerId};
use grocery_repository::CustomerRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state
///
/// One lock guards the repository. Handlers that mutate hold the write lock
/// across the mutation and the following save.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<RwLock<Box<dyn CustomerRepository>>>,
}

impl AppState {
    pub fn new(repository: Box<dyn CustomerRepository>) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create/update request body
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerEditPayload {
    /// Customer name (required, must not be blank)
    pub name: String,
}

impl CustomerEditPayload {
    /// A payload is valid when the name has non-whitespace content
    pub fn validate(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// New customer record; the repository assigns the id
    pub fn into_customer(self) -> Customer {
        Customer::unassigned(self.name)
    }

    /// Copy the edited fields onto an existing record, keeping its id
    pub fn apply_to(self, mut customer: Customer) -> Customer {
        customer.name = self.name;
        customer
    }
}

/// Customer response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerReadPayload {
    pub id: CustomerId,
    pub name: String,
}

impl From<Customer> for CustomerReadPayload {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
        }
    }
}
