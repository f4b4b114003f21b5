//! Router configuration for the API.

use std::time::Duration;

use axum::http::StatusCode;
use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api::handlers::health::health_routes;
use crate::api::handlers::reports::{buyer_report_routes, locality_report_routes};
use crate::api::handlers::resource::resource_routes;
use crate::api::middleware::{global_error_handler, logging_middleware, request_id_middleware};
use crate::models::{
    Buyer, Carrier, Employee, Locality, Product, PurchaseOrder, Section, Seller, Warehouse,
};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Resources are mounted under `/api/v1`, the health check at `/health`.
///
/// # Middleware Order
/// Layers run outermost first: CORS, compression, request id, logging,
/// then the error normalizer closest to the handlers so it sees the request
/// id set by the outer layer.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest(
            "/buyers",
            resource_routes::<Buyer>().merge(buyer_report_routes()),
        )
        .nest("/sellers", resource_routes::<Seller>())
        .nest("/employees", resource_routes::<Employee>())
        .nest("/products", resource_routes::<Product>())
        .nest("/sections", resource_routes::<Section>())
        .nest("/warehouses", resource_routes::<Warehouse>())
        .nest("/carriers", resource_routes::<Carrier>())
        .nest(
            "/localities",
            resource_routes::<Locality>().merge(locality_report_routes()),
        )
        .nest("/purchase-orders", resource_routes::<PurchaseOrder>());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_routes)
        // Last added runs first
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Answers any request still running after `timeout` with 408.
pub fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        timeout,
    ))
}
