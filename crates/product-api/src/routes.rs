//! # Routes
//!
//! Axum router configuration for the product API.

use crate::handlers;
use crate::middleware::{handle_panic, log_request};
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET    /                    - Welcome text
/// - GET    /health              - Health check
/// - GET    /api/products        - List products
/// - POST   /api/products        - Create product (bearer auth)
/// - GET    /api/products/{id}   - Get product
/// - PUT    /api/products/{id}   - Update product (bearer auth)
/// - DELETE /api/products/{id}   - Delete product (bearer auth)
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let product_routes = Router::new()
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/products/{product_id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        );

    // Outermost first: trace, cors, panic catcher, then the request logger
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_request));

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .merge(product_routes)
        .fallback(handlers::not_found)
        .layer(layers)
        .with_state(state)
}
