//! Integration tests for the file system document storage

use grocery_core::Customer;
use grocery_repository::{
    CustomerRepository, CustomerStore, DocumentStorage, FileDocument, JsonCustomerRepository,
    RepositoryError,
};
use std::fs;
use tempfile::TempDir;

/// Helper to write a document into a temp dir
fn create_document(contents: &str) -> (TempDir, FileDocument) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("database.json");
    fs::write(&path, contents).unwrap();

    let storage = FileDocument::new(&path).unwrap();
    (temp_dir, storage)
}

#[test]
fn test_file_document_path_is_absolute() {
    let storage = FileDocument::new("relative/database.json").unwrap();
    assert!(storage.path().is_absolute());
    assert!(storage.path().ends_with("relative/database.json"));
}

#[test]
fn test_file_document_empty_path_is_invalid() {
    let result = FileDocument::new("");
    assert!(matches!(result, Err(RepositoryError::InvalidPath { .. })));
}

#[test]
fn test_read_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileDocument::new(temp_dir.path().join("absent.json")).unwrap();

    assert!(matches!(
        storage.read_document(),
        Err(RepositoryError::Io(_))
    ));
}

#[test]
fn test_load_missing_file_is_initialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileDocument::new(temp_dir.path().join("absent.json")).unwrap();

    let err = CustomerStore::load(storage).unwrap_err();
    assert!(matches!(err, RepositoryError::Initialization { .. }));
}

#[test]
fn test_load_corrupt_file_is_initialization_error() {
    let (_temp, storage) = create_document("customers: [1, 2]");

    let err = CustomerStore::load(storage).unwrap_err();
    assert!(matches!(err, RepositoryError::Initialization { .. }));
}

#[test]
fn test_add_and_save_writes_file() -> anyhow::Result<()> {
    let (_temp, storage) = create_document(r#"{"customers":[{"id":1,"name":"Bob"}]}"#);
    let path = storage.path().to_path_buf();

    let mut repo = JsonCustomerRepository::load(storage)?;
    let created = repo.add_customer(Customer::unassigned("Mary"))?;
    assert_eq!(created.id, 2);

    // nothing written before save
    assert_eq!(
        fs::read_to_string(&path)?,
        r#"{"customers":[{"id":1,"name":"Bob"}]}"#
    );

    repo.save_changes()?;

    assert_eq!(
        fs::read_to_string(&path)?,
        r#"{"customers":[{"id":1,"name":"Bob"},{"id":2,"name":"Mary"}]}"#
    );
    Ok(())
}

#[test]
fn test_reload_after_save() -> anyhow::Result<()> {
    let (_temp, storage) = create_document(r#"{"customers":[{"id":1,"name":"Bob"}]}"#);

    let mut repo = JsonCustomerRepository::load(storage.clone())?;
    repo.update_customer(Customer::new(1, "Robert"))?;
    repo.add_customer(Customer::unassigned("Mary"))?;
    repo.save_changes()?;

    let reloaded = JsonCustomerRepository::load(storage)?;
    assert_eq!(
        reloaded.get_all_customers(),
        vec![Customer::new(1, "Robert"), Customer::new(2, "Mary")]
    );
    Ok(())
}

/// Swap the document file for a directory so writes to it fail
fn make_unwritable(path: &std::path::Path) {
    fs::remove_file(path).unwrap();
    fs::create_dir(path).unwrap();
}

#[test]
fn test_failed_save_is_io_error_and_keeps_memory() -> anyhow::Result<()> {
    let (_temp, storage) = create_document(r#"{"customers":[{"id":1,"name":"Bob"}]}"#);
    let path = storage.path().to_path_buf();

    let mut repo = JsonCustomerRepository::load(storage)?;
    repo.add_customer(Customer::unassigned("Mary"))?;
    make_unwritable(&path);

    let result = repo.save_changes();
    assert!(matches!(result, Err(RepositoryError::Io(_))));

    assert_eq!(
        repo.get_all_customers(),
        vec![Customer::new(1, "Bob"), Customer::new(2, "Mary")]
    );
    Ok(())
}

#[test]
fn test_discard_after_failed_save_restores_loaded_records() -> anyhow::Result<()> {
    let (_temp, storage) = create_document(r#"{"customers":[{"id":1,"name":"Bob"}]}"#);
    let path = storage.path().to_path_buf();

    let mut repo = JsonCustomerRepository::load(storage)?;
    repo.delete_customer(&Customer::new(1, "Bob"))?;
    make_unwritable(&path);

    assert!(repo.save_changes().is_err());
    repo.discard_changes();

    assert_eq!(repo.get_all_customers(), vec![Customer::new(1, "Bob")]);
    Ok(())
}
