//! Unit tests for the Customer record

use grocery_core::Customer;
use serde_json::json;

#[test]
fn test_customer_serializes_as_id_and_name() {
    let customer = Customer::new(3, "Alice");
    let value = serde_json::to_value(&customer).unwrap();

    assert_eq!(value, json!({ "id": 3, "name": "Alice" }));
}

#[test]
fn test_customer_deserialize() -> anyhow::Result<()> {
    let customer: Customer = serde_json::from_str(r#"{"id": 7, "name": "Bob"}"#)?;

    assert_eq!(customer.id, 7);
    assert_eq!(customer.name, "Bob");
    Ok(())
}

#[test]
fn test_customer_deserialize_rejects_missing_name() {
    let result: Result<Customer, _> = serde_json::from_str(r#"{"id": 7}"#);
    assert!(result.is_err());
}

#[test]
fn test_unassigned_customer_has_zero_id() {
    let customer = Customer::unassigned("Carol");

    assert_eq!(customer.id, 0);
    assert_eq!(customer.with_id(12).id, 12);
}

#[test]
fn test_clone_is_independent() {
    let original = Customer::new(1, "Dave");
    let mut copy = original.clone();
    copy.name = "Changed".to_string();

    assert_eq!(original.name, "Dave");
    assert_ne!(original, copy);
}
