//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use refundshield_core::{AnalysisResult, ScamReport};
use tracing::{error, info};

/// File served by the case study endpoint, relative to the data directory
pub(super) const CASE_STUDIES_FILE: &str = "case_studies.json";

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "refund-scam-detector".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Verification endpoint
#[axum::debug_handler]
pub(super) async fn verify(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<VerifyRequestPayload>,
) -> Result<Json<AnalysisResult>, ServerError> {
    let report = ScamReport::try_from(payload)?;

    info!(
        "Received verification request for platform '{}', description {} chars",
        report.platform,
        report.description.chars().count()
    );

    let result = state.engine.analyze(&report);

    info!(
        "Verification complete: score={} level={} flags={}",
        result.risk_score,
        result.risk_level,
        result.red_flags.len()
    );

    Ok(Json(result))
}

/// Case study endpoint, serves the externally maintained list verbatim
pub(super) async fn case_studies(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let path = state.data_dir.join(CASE_STUDIES_FILE);

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| case_study_error(e.to_string()))?;
    let studies = serde_json::from_str(&content).map_err(|e| case_study_error(e.to_string()))?;

    Ok(Json(studies))
}

fn case_study_error(reason: String) -> ServerError {
    error!("Failed to load case studies: {}", reason);
    ServerError::InternalError(format!("Error loading case studies: {}", reason))
}

/// Statistics endpoint
pub(super) async fn stats() -> Json<StatsResponse> {
    Json(StatsResponse::default())
}
