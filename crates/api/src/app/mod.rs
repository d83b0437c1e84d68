//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring and the movie operations behind each endpoint
//! - `routes/`: HTTP routes + handlers
//! - `headers.rs`: entity alert headers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod errors;
pub mod headers;
pub mod routes;
pub mod services;

/// Base path of the REST surface.
pub const API_BASE: &str = "/api";

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: services::AppServices) -> Router {
    let services = Arc::new(services);

    let api = routes::router().layer(Extension(services));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest(API_BASE, api)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_requests)))
}
