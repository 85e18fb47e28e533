//! RefundShield HTTP Server
//!
//! Provides the REST API for refund scam verification.

use anyhow::Result;
use refundshield_server::api::{create_router, AppState};
use refundshield_server::config::{LogFormat, ServerConfig};
use refundshield_server::engine;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize detection engine
    let engine = engine::init_engine(&config).await?;

    let state = AppState {
        engine: Arc::new(engine),
        data_dir: config.data_dir.clone(),
    };
    let app = create_router(state, Some(&config.static_dir));

    // Start server
    let addr = config.addr();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/api/health", addr);
    info!("  Verify API: POST http://{}/api/verify", addr);
    info!("  Case studies: http://{}/api/case-studies", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
