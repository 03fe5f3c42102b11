//! # product-api
//!
//! HTTP API layer for product-catalog-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for product CRUD
//! - Bearer-token authorization for mutating routes
//! - Request logging and a uniform error boundary
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Welcome text |
//! | GET | `/health` | Health check |
//! | GET | `/api/products` | List products |
//! | GET | `/api/products/{id}` | Get product |
//! | POST | `/api/products` | Create product (auth) |
//! | PUT | `/api/products/{id}` | Update product (auth) |
//! | DELETE | `/api/products/{id}` | Delete product (auth) |

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppConfig, AppState};
