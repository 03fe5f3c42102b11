//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the product store and configuration.

use anyhow::Context;
use product_core::{ProductCatalog, ProductStore};
use std::net::SocketAddr;

/// Bearer credential used when `API_TOKEN` is not set
pub const DEFAULT_API_TOKEN: &str = "secrettoken";

/// Port used when `PORT` is not set or unparsable
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Credential expected in `Authorization: Bearer <token>`
    pub api_token: String,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Explicit seed catalog path
    pub products_file: Option<String>,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            api_token: std::env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            products_file: std::env::var("PRODUCTS_FILE").ok(),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product store
    pub store: ProductStore,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from the environment, seeding the store from the catalog file
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let catalog = load_product_catalog(config.products_file.as_deref())?;
        let store = ProductStore::from_catalog(catalog).context("Failed to seed product store")?;

        Ok(Self::with_store(config, store))
    }

    /// Create state from explicit parts
    pub fn with_store(config: AppConfig, store: ProductStore) -> Self {
        Self { store, config }
    }
}

/// Load the seed catalog from config file
fn load_product_catalog(explicit: Option<&str>) -> anyhow::Result<ProductCatalog> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?;
        return parse_catalog(path, &content);
    }

    let config_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            return parse_catalog(path, &content);
        }
    }

    tracing::warn!("No product catalog found, starting with an empty store");
    Ok(ProductCatalog::new())
}

fn parse_catalog(path: &str, content: &str) -> anyhow::Result<ProductCatalog> {
    let catalog = ProductCatalog::from_toml(content)
        .with_context(|| format!("Failed to parse {}", path))?;
    tracing::info!("Loaded {} products from {}", catalog.len(), path);
    Ok(catalog)
}
