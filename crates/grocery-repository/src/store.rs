//! In-memory customer store backed by a JSON document

use grocery_core::{Customer, CustomerId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::{error::RepositoryError, traits::DocumentStorage, RepositoryResult};

/// Shape of the backing document
///
/// Unknown top-level fields are ignored on load and dropped on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDocument {
    pub customers: Vec<Customer>,
}

/// Borrowed form of [`CustomerDocument`] used when saving
#[derive(Serialize)]
struct CustomerDocumentRef<'a> {
    customers: &'a [Customer],
}

/// Authoritative customer collection
///
/// Owns the records and the storage they came from. No two records share an
/// id. Mutations stay in memory until [`save`](CustomerStore::save), and can
/// be dropped with [`discard_changes`](CustomerStore::discard_changes).
#[derive(Debug)]
pub struct CustomerStore<S> {
    storage: S,
    customers: Vec<Customer>,
    /// Collection as of the last successful load or save
    persisted: Vec<Customer>,
}

impl<S: DocumentStorage> CustomerStore<S> {
    /// Load the collection from `storage`
    ///
    /// Fails with [`RepositoryError::Initialization`] if the document cannot
    /// be read, does not parse as `{"customers": [...]}`, or repeats an id.
    pub fn load(storage: S) -> RepositoryResult<Self> {
        let location = storage.describe();

        let bytes = storage.read_document().map_err(|e| {
            RepositoryError::initialization(format!("failed to read {}: {}", location, e))
        })?;

        let document: CustomerDocument = serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::initialization(format!("failed to parse {}: {}", location, e))
        })?;

        let mut seen = HashSet::with_capacity(document.customers.len());
        if let Some(duplicate) = document.customers.iter().find(|c| !seen.insert(c.id)) {
            return Err(RepositoryError::initialization(format!(
                "duplicate customer id {} in {}",
                duplicate.id, location
            )));
        }

        info!(
            "Loaded {} customers from {}",
            document.customers.len(),
            location
        );

        Ok(Self {
            storage,
            persisted: document.customers.clone(),
            customers: document.customers,
        })
    }

    /// Read-only view of the collection
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Find a customer by id
    pub fn find(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// The storage this store saves to
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a customer
    ///
    /// Fails with [`RepositoryError::DuplicateKey`] if the id is taken.
    pub fn add(&mut self, customer: Customer) -> RepositoryResult<()> {
        if self.position(customer.id).is_some() {
            return Err(RepositoryError::DuplicateKey { id: customer.id });
        }

        debug!("Adding customer {}", customer.id);
        self.customers.push(customer);
        Ok(())
    }

    /// Replace the customer with the same id
    ///
    /// Fails with [`RepositoryError::NotFound`] if no such customer exists.
    pub fn update(&mut self, customer: Customer) -> RepositoryResult<()> {
        let index = self
            .position(customer.id)
            .ok_or(RepositoryError::NotFound { id: customer.id })?;

        debug!("Updating customer {}", customer.id);
        self.customers[index] = customer;
        Ok(())
    }

    /// Remove the customer with the same id
    ///
    /// Fails with [`RepositoryError::NotFound`] if no such customer exists.
    pub fn delete(&mut self, customer: &Customer) -> RepositoryResult<()> {
        let index = self
            .position(customer.id)
            .ok_or(RepositoryError::NotFound { id: customer.id })?;

        debug!("Deleting customer {}", customer.id);
        self.customers.remove(index);
        Ok(())
    }

    /// Whether the collection differs from the last persisted one
    pub fn has_changes(&self) -> bool {
        self.customers != self.persisted
    }

    /// Overwrite the backing document with the current collection
    ///
    /// Output is compact JSON in collection order, so saving an unchanged
    /// collection twice writes identical bytes. On failure the in-memory
    /// collection is left as it was.
    pub fn save(&mut self) -> RepositoryResult<()> {
        let bytes = serde_json::to_vec(&CustomerDocumentRef {
            customers: &self.customers,
        })?;

        self.storage.write_document(&bytes)?;
        self.persisted.clone_from(&self.customers);

        info!(
            "Saved {} customers to {}",
            self.customers.len(),
            self.storage.describe()
        );
        Ok(())
    }

    /// Drop every mutation made since the last successful load or save
    pub fn discard_changes(&mut self) {
        if self.has_changes() {
            warn!(
                "Discarding unsaved changes to {}",
                self.storage.describe()
            );
            self.customers.clone_from(&self.persisted);
        }
    }

    fn position(&self, id: CustomerId) -> Option<usize> {
        self.customers.iter().position(|c| c.id == id)
    }
}
