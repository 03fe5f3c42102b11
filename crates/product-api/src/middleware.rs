//! # Middleware
//!
//! Per-request logging and the panic catch-all.

use crate::error::internal_error_response;
use axum::{extract::Request, http::Method, middleware::Next, response::Response};
use chrono::{DateTime, SecondsFormat, Utc};
use std::any::Any;
use std::fmt;
use tracing::{error, info};

/// One line of the request log
#[derive(Debug, Clone)]
pub struct RequestLogEntry {
    pub method: Method,
    pub path: String,
    pub timestamp: DateTime<Utc>,
}

impl RequestLogEntry {
    pub fn from_request(request: &Request) -> Self {
        let path = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_owned())
            .unwrap_or_else(|| request.uri().path().to_owned());

        Self {
            method: request.method().clone(),
            path,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for RequestLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.method,
            self.path
        )
    }
}

/// Records method, path and timestamp before any handler runs
pub async fn log_request(request: Request, next: Next) -> Response {
    let entry = RequestLogEntry::from_request(&request);
    info!(
        method = %entry.method,
        path = %entry.path,
        timestamp = %entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        "{}",
        entry
    );
    next.run(request).await
}

/// Turns a handler panic into the generic 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "handler panicked");
    internal_error_response()
}
