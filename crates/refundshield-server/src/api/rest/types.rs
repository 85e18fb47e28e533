//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use super::conversions::{lenient_bool, lenient_string};
use refundshield_sdk::DetectionEngine;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Shared read-only engine; no lock needed
    pub engine: Arc<DetectionEngine>,

    /// Directory holding case_studies.json
    pub data_dir: PathBuf,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Verification request payload
///
/// Every field is optional at the decoding stage; required fields are checked
/// when converting into a `ScamReport`.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyRequestPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub platform: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub upi_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub bank_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub asked_money: bool,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub asked_otp: bool,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

/// General refund scam statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_scam_types: u32,
    pub helpline: String,
    pub common_platforms: Vec<String>,
    pub avg_loss: String,
}

impl Default for StatsResponse {
    fn default() -> Self {
        Self {
            total_scam_types: 7,
            helpline: "1930".to_string(),
            common_platforms: ["Amazon", "Flipkart", "Meesho", "PhonePe", "PayTM"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            avg_loss: "₹15,000 - ₹50,000".to_string(),
        }
    }
}
