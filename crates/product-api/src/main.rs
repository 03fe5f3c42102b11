//! # Product API
//!
//! In-memory product catalog over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export PORT=5000
//! export API_TOKEN=secrettoken
//! export PRODUCTS_FILE=config/products.toml
//!
//! # Run the server
//! product-api
//! ```

use product_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.store.len()?);

    let app = routes::create_router(state);

    info!("Product API starting on http://{}", addr);

    if !is_prod {
        info!("Products: GET http://{}/api/products", addr);
        info!("Health: GET http://{}/health", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Product API
  ━━━━━━━━━━━━━━━━━━━━━━━
  In-memory product catalog
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
