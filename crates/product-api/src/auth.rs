//! # Bearer Authorization
//!
//! Static shared-secret check for mutating routes.
//!
//! Handlers opt in by taking [`BearerAuth`] as an argument. It is a parts
//! extractor, so it runs before the JSON body is read.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::debug;

/// Proof that the request carried the expected bearer credential
#[derive(Debug, Clone, Copy)]
pub struct BearerAuth;

/// Succeeds only if `Authorization` is exactly `Bearer <token>`
pub fn authorize(headers: &HeaderMap, token: &str) -> Result<(), ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    match header.strip_prefix("Bearer ") {
        Some(presented) if presented == token => Ok(()),
        _ => {
            debug!("bearer credential mismatch");
            Err(ApiError::Unauthorized)
        }
    }
}

impl FromRequestParts<AppState> for BearerAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authorize(&parts.headers, &state.config.api_token)?;
        Ok(BearerAuth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_exact_match() {
        assert!(authorize(&headers("Bearer secrettoken"), "secrettoken").is_ok());
    }

    #[test]
    fn test_rejections() {
        assert!(authorize(&HeaderMap::new(), "secrettoken").is_err());
        assert!(authorize(&headers("Bearer wrong"), "secrettoken").is_err());
        assert!(authorize(&headers("secrettoken"), "secrettoken").is_err());
        assert!(authorize(&headers("bearer secrettoken"), "secrettoken").is_err());
        assert!(authorize(&headers("Bearer secrettoken "), "secrettoken").is_err());
    }

    #[test]
    fn test_swapped_credential() {
        assert!(authorize(&headers("Bearer other"), "other").is_ok());
        assert!(authorize(&headers("Bearer secrettoken"), "other").is_err());
    }
}
