//! # Product Error Types
//!
//! Typed error handling for the product catalog.
//! All store and validation operations return `Result<T, ProductError>`.

use thiserror::Error;

/// Core error type for all product operations
#[derive(Debug, Error)]
pub enum ProductError {
    /// Payload failed create validation
    #[error("Invalid product data: {0}")]
    Validation(String),

    /// No product with this id in the store
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// Insert attempted with an id that is already taken
    #[error("Duplicate product id: {id}")]
    DuplicateId { id: String },

    /// The store lock was poisoned by a panicking writer
    #[error("Product store unavailable: {0}")]
    StoreUnavailable(String),

    /// Seed catalog could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl ProductError {
    /// Shorthand for a not-found error
    pub fn not_found(id: impl Into<String>) -> Self {
        ProductError::NotFound { id: id.into() }
    }

    /// Returns true if the failure was caused by the client's request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ProductError::Validation(_) | ProductError::NotFound { .. }
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ProductError::Validation(_) => 400,
            ProductError::NotFound { .. } => 404,
            ProductError::DuplicateId { .. } => 500,
            ProductError::StoreUnavailable(_) => 500,
            ProductError::Catalog(_) => 500,
        }
    }
}

/// Result type alias for product operations
pub type ProductResult<T> = Result<T, ProductError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ProductError::Validation("name".into()).status_code(), 400);
        assert_eq!(ProductError::not_found("42").status_code(), 404);
        assert_eq!(
            ProductError::DuplicateId { id: "1".into() }.status_code(),
            500
        );
        assert_eq!(
            ProductError::StoreUnavailable("poisoned".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(ProductError::Validation("price".into()).is_client_error());
        assert!(ProductError::not_found("x").is_client_error());
        assert!(!ProductError::DuplicateId { id: "x".into() }.is_client_error());
    }

    #[test]
    fn test_display_includes_id() {
        let err = ProductError::not_found("abc");
        assert_eq!(err.to_string(), "Product not found: abc");
    }
}
