//! Type conversion utilities
//!
//! Optional request fields are decoded leniently: a value of the wrong JSON
//! type is treated as absent (or `false`) instead of rejecting the request.

use super::types::VerifyRequestPayload;
use crate::error::ServerError;
use refundshield_core::ScamReport;
use serde::{Deserialize, Deserializer};

/// Strings pass through, numbers are rendered, anything else is absent
pub(super) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Only a JSON `true` counts as true
pub(super) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ServerError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServerError::InvalidRequest(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

impl TryFrom<VerifyRequestPayload> for ScamReport {
    type Error = ServerError;

    fn try_from(payload: VerifyRequestPayload) -> Result<Self, Self::Error> {
        // Checked in this order; the first missing field is reported
        let platform = required("platform", payload.platform)?;
        let phone = required("phone", payload.phone)?;
        let description = required("description", payload.description)?;

        Ok(ScamReport {
            platform,
            phone: Some(phone),
            upi_id: payload.upi_id,
            bank_name: payload.bank_name,
            asked_money: payload.asked_money,
            asked_otp: payload.asked_otp,
            description,
        })
    }
}
