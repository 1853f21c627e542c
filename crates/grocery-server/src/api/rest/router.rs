//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use grocery_repository::CustomerRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(repository: Box<dyn CustomerRepository>) -> Router {
    let state = AppState::new(repository);

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/customers",
            get(get_all_customers).post(create_customer),
        )
        .route(
            "/api/customers/:id",
            get(get_customer_by_id)
                .put(update_customer)
                .delete(delete_customer),
        )
        .route("/api/codingchallenge", post(get_missing_elements))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
