//! Customer repository over a JSON document store

use grocery_core::{Customer, CustomerId};
use tracing::info;

use crate::{error::RepositoryError, store::CustomerStore, traits::*, RepositoryResult};

/// Repository that allocates ids and delegates storage to a [`CustomerStore`]
///
/// Ids are assigned here and never by the store: a new customer gets the
/// current maximum id plus one, or `1` when the collection is empty. A
/// deleted maximum id is therefore handed out again only if it is still the
/// maximum when the next customer is added.
#[derive(Debug)]
pub struct JsonCustomerRepository<S> {
    store: CustomerStore<S>,
}

impl<S: DocumentStorage> JsonCustomerRepository<S> {
    /// Wrap an already loaded store
    pub fn new(store: CustomerStore<S>) -> Self {
        Self { store }
    }

    /// Load the store from `storage` and wrap it
    pub fn load(storage: S) -> RepositoryResult<Self> {
        Ok(Self::new(CustomerStore::load(storage)?))
    }

    /// The underlying store
    pub fn store(&self) -> &CustomerStore<S> {
        &self.store
    }

    fn next_id(&self) -> RepositoryResult<CustomerId> {
        match self.store.customers().iter().map(|c| c.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or(RepositoryError::IdExhausted { max }),
        }
    }
}

impl<S: DocumentStorage> CustomerRepository for JsonCustomerRepository<S> {
    fn get_all_customers(&self) -> Vec<Customer> {
        self.store.customers().to_vec()
    }

    fn get_customer_by_id(&self, id: CustomerId) -> Option<Customer> {
        self.store.find(id).cloned()
    }

    fn add_customer(&mut self, customer: Customer) -> RepositoryResult<Customer> {
        let customer = customer.with_id(self.next_id()?);
        self.store.add(customer.clone())?;

        info!("Added customer {}", customer.id);
        Ok(customer)
    }

    fn update_customer(&mut self, customer: Customer) -> RepositoryResult<()> {
        self.store.update(customer)
    }

    fn delete_customer(&mut self, customer: &Customer) -> RepositoryResult<()> {
        self.store.delete(customer)
    }

    fn save_changes(&mut self) -> RepositoryResult<()> {
        self.store.save()
    }

    fn discard_changes(&mut self) {
        self.store.discard_changes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryDocument;

    fn repo_with(json: &str) -> JsonCustomerRepository<MemoryDocument> {
        JsonCustomerRepository::load(MemoryDocument::with_contents(json)).unwrap()
    }

    #[test]
    fn test_first_id_is_one() {
        let mut repo = repo_with(r#"{"customers":[]}"#);

        let created = repo.add_customer(Customer::unassigned("Alice")).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_next_id_follows_max_not_count() {
        let mut repo = repo_with(r#"{"customers":[{"id":10,"name":"A"},{"id":3,"name":"B"}]}"#);

        let created = repo.add_customer(Customer::unassigned("C")).unwrap();
        assert_eq!(created.id, 11);
    }

    #[test]
    fn test_caller_supplied_id_is_overwritten() {
        let mut repo = repo_with(r#"{"customers":[{"id":1,"name":"A"}]}"#);

        let created = repo.add_customer(Customer::new(1, "B")).unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(repo.get_all_customers().len(), 2);
    }

    #[test]
    fn test_deleted_max_id_is_reused_only_while_still_max() {
        let mut repo = repo_with(r#"{"customers":[{"id":1,"name":"A"},{"id":2,"name":"B"}]}"#);

        repo.delete_customer(&Customer::new(2, "B")).unwrap();
        let created = repo.add_customer(Customer::unassigned("C")).unwrap();
        assert_eq!(created.id, 2);

        repo.delete_customer(&Customer::new(1, "A")).unwrap();
        let created = repo.add_customer(Customer::unassigned("D")).unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn test_id_exhausted() {
        let json = format!(r#"{{"customers":[{{"id":{},"name":"A"}}]}}"#, CustomerId::MAX);
        let mut repo = repo_with(&json);

        let err = repo.add_customer(Customer::unassigned("B")).unwrap_err();
        assert!(matches!(err, RepositoryError::IdExhausted { .. }));
        assert_eq!(repo.get_all_customers().len(), 1);
    }

    #[test]
    fn test_discard_changes_frees_allocated_id() {
        let mut repo = repo_with(r#"{"customers":[{"id":1,"name":"A"}]}"#);

        let created = repo.add_customer(Customer::unassigned("B")).unwrap();
        assert_eq!(created.id, 2);
        repo.discard_changes();

        assert_eq!(repo.get_all_customers(), vec![Customer::new(1, "A")]);
        let created = repo.add_customer(Customer::unassigned("C")).unwrap();
        assert_eq!(created.id, 2);
    }

    #[test]
    fn test_get_by_id_returns_copy() {
        let repo = repo_with(r#"{"customers":[{"id":1,"name":"A"}]}"#);

        let mut copy = repo.get_customer_by_id(1).unwrap();
        copy.name = "Changed".to_string();

        assert_eq!(repo.get_customer_by_id(1).unwrap().name, "A");
        assert!(repo.get_customer_by_id(99).is_none());
    }
}
