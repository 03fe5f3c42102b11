//! # Request Handlers
//!
//! Axum request handlers for the product API.
//! Mutating handlers take [`BearerAuth`] first so authorization runs
//! before the body is decoded.

use crate::auth::BearerAuth;
use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use product_core::{validate_create, Product, ProductError, ProductPatch, ProductResult};
use serde_json::Value;
use tracing::{debug, info, instrument};

pub const WELCOME: &str = "Welcome to the Product API! Go to /api/products to see all products.";

/// Plain-text landing message
pub async fn welcome() -> &'static str {
    WELCOME
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "product-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List all products in insertion order
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.store.list_all()?))
}

/// Get single product
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.store.find_by_id(&product_id)?))
}

/// Create a product with a system-assigned id
#[instrument(skip_all)]
pub async fn create_product(
    _auth: BearerAuth,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(payload) = payload?;
    debug!(%payload, "received product payload");

    let new_product = validate_create(&payload)?;
    let product = state.store.insert(Product::create(new_product))?;

    info!(product_id = %product.id, name = %product.name, "created product");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Merge a partial payload onto an existing product.
///
/// The id is resolved before the body is decoded, so a missing product is
/// a 404 whatever the body holds. Field contents are not validated, only
/// their JSON types.
#[instrument(skip(state, payload))]
pub async fn update_product(
    _auth: BearerAuth,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let product = state.store.modify(&product_id, |product| {
        product.apply(patch_from(payload)?);
        Ok(())
    })?;

    info!(product_id = %product.id, "updated product");
    Ok(Json(product))
}

/// A request without a JSON content type carries no fields to merge
fn patch_from(payload: Result<Json<Value>, JsonRejection>) -> ProductResult<ProductPatch> {
    match payload {
        Ok(Json(value)) => ProductPatch::from_json(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(ProductPatch::default()),
        Err(rejection) => Err(ProductError::Validation(rejection.body_text())),
    }
}

/// Delete a product
#[instrument(skip(state))]
pub async fn delete_product(
    _auth: BearerAuth,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = state.store.remove(&product_id)?;

    info!(product_id = %removed.id, "deleted product");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
