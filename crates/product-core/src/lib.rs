//! # product-core
//!
//! Core types for the product catalog service.
//!
//! This crate provides:
//! - `Product`, `NewProduct` and `ProductPatch` for the product record
//! - `ProductCatalog` for seed data loaded from TOML
//! - `validate_create` for create payload checks
//! - `ProductStore`, the mutex-guarded in-memory collection
//! - `ProductError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use product_core::{validate_create, Product, ProductPatch, ProductStore};
//! use serde_json::json;
//!
//! let store = ProductStore::new();
//!
//! let new = validate_create(&json!({
//!     "name": "Desk",
//!     "description": "Oak desk",
//!     "price": 150
//! }))
//! .unwrap();
//! let desk = store.insert(Product::create(new)).unwrap();
//!
//! let patch = ProductPatch::from_json(json!({ "price": 140 })).unwrap();
//! let desk = store.update(&desk.id, patch).unwrap();
//! assert_eq!(desk.name, "Desk");
//! ```

pub mod error;
pub mod product;
pub mod store;
pub mod validate;

// Re-exports for convenience
pub use error::{ProductError, ProductResult};
pub use product::{NewProduct, Product, ProductCatalog, ProductPatch};
pub use store::ProductStore;
pub use validate::{truthy, validate_create};
