//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::{CustomerIdPath, JsonBody};
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use grocery_core::{missing_ranges, CustomerId};
use grocery_repository::{require, CustomerRepository};
use tracing::{info, warn};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/customers
pub(super) async fn get_all_customers(
    State(state): State<AppState>,
) -> Json<Vec<CustomerReadPayload>> {
    let repository = state.repository.read().await;
    let customers = repository.get_all_customers();

    Json(customers.into_iter().map(CustomerReadPayload::from).collect())
}

/// GET /api/customers/:id
pub(super) async fn get_customer_by_id(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
) -> Result<Json<CustomerReadPayload>, ServerError> {
    let repository = state.repository.read().await;

    repository
        .get_customer_by_id(id)
        .map(|customer| Json(customer.into()))
        .ok_or_else(|| customer_not_found(id))
}

/// POST /api/customers
///
/// Responds 201 with a `Location` header pointing at the new customer.
/// Every mutating handler saves before answering; if the save fails the
/// change is discarded from memory and the client gets a 500.
pub(super) async fn create_customer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Option<CustomerEditPayload>>,
) -> Result<impl IntoResponse, ServerError> {
    let payload = validated(payload)?;

    // Allocation and save happen under one write lock
    let created = {
        let mut repository = state.repository.write().await;
        let created = repository.add_customer(payload.into_customer())?;
        save_or_discard(&mut **repository)?;
        created
    };

    info!("Created customer {}", created.id);

    let location = format!("/api/customers/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CustomerReadPayload::from(created)),
    ))
}

/// PUT /api/customers/:id
pub(super) async fn update_customer(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
    JsonBody(payload): JsonBody<Option<CustomerEditPayload>>,
) -> Result<StatusCode, ServerError> {
    let payload = validated(payload)?;

    let mut repository = state.repository.write().await;
    let existing = repository
        .get_customer_by_id(id)
        .ok_or_else(|| customer_not_found(id))?;

    repository.update_customer(payload.apply_to(existing))?;
    save_or_discard(&mut **repository)?;

    info!("Updated customer {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/customers/:id
pub(super) async fn delete_customer(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
) -> Result<StatusCode, ServerError> {
    let mut repository = state.repository.write().await;
    let existing = repository
        .get_customer_by_id(id)
        .ok_or_else(|| customer_not_found(id))?;

    repository.delete_customer(&existing)?;
    save_or_discard(&mut **repository)?;

    info!("Deleted customer {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/codingchallenge
///
/// Takes a sorted array of integers in `[1, 99]` and returns the missing
/// values as comma-separated range tokens.
pub(super) async fn get_missing_elements(
    JsonBody(payload): JsonBody<Option<Vec<i32>>>,
) -> Result<String, ServerError> {
    let values = match payload {
        Some(values) if !values.is_empty() => values,
        _ => return Ok(missing_ranges::missing_elements(&[])),
    };

    if !missing_ranges::validate(&values) {
        return Err(ServerError::InvalidRequest(
            "input array is invalid".to_string(),
        ));
    }

    Ok(missing_ranges::missing_elements(&values))
}

fn validated(payload: Option<CustomerEditPayload>) -> Result<CustomerEditPayload, ServerError> {
    let payload = require(payload, "customer")?;

    if !payload.validate() {
        return Err(ServerError::InvalidRequest("Invalid Customer".to_string()));
    }

    Ok(payload)
}

/// Save, or roll memory back to the last saved state
fn save_or_discard(repository: &mut dyn CustomerRepository) -> Result<(), ServerError> {
    repository.save_changes().map_err(|err| {
        warn!("Save failed, discarding unsaved changes: {}", err);
        repository.discard_changes();
        ServerError::from(err)
    })
}

fn customer_not_found(id: CustomerId) -> ServerError {
    ServerError::NotFound(format!("Customer {} not found", id))
}
