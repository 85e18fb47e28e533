//! Detection engine initialization
//!
//! Thin wrapper around the SDK's DetectionEngineBuilder that maps server
//! configuration onto engine configuration.

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use refundshield_sdk::{DetectionEngine, DetectionEngineBuilder};
use tracing::info;

/// Initialize detection engine
pub async fn init_engine(config: &ServerConfig) -> Result<DetectionEngine> {
    info!("Loading pattern documents from {}", config.data_dir.display());

    let engine = DetectionEngineBuilder::new()
        .with_data_dir(&config.data_dir)
        .build()
        .await
        .with_context(|| {
            format!(
                "Failed to load pattern documents from {}",
                config.data_dir.display()
            )
        })?;

    info!("Detection engine ready with {} rules", engine.rule_ids().len());
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_engine_with_empty_data_dir() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig {
            data_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        let engine = init_engine(&config).await.unwrap();
        assert_eq!(engine.rule_ids().len(), 10);
    }

    #[tokio::test]
    async fn test_init_engine_rejects_broken_document() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("legitimate_banks.json"), "[]")
            .await
            .unwrap();
        let config = ServerConfig {
            data_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        let err = init_engine(&config).await.err().unwrap();
        assert!(err.to_string().contains("Failed to load pattern documents"));
    }
}
