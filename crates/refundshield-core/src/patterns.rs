//! Pattern store: keyword lists and the legitimate bank registry
//!
//! Both documents can be supplied as JSON; the `Default` impls hold the
//! built-in lists used when no document is available.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Keyword and phrase lists scanned against lower-cased descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamPatterns {
    pub urgency_keywords: Vec<String>,
    pub payment_keywords: Vec<String>,
    /// Loaded and kept for consumers; no built-in rule reads it.
    pub otp_keywords: Vec<String>,
    pub suspicious_phrases: Vec<String>,
}

impl Default for ScamPatterns {
    fn default() -> Self {
        Self {
            urgency_keywords: strings(&[
                "urgent",
                "immediately",
                "within 24 hours",
                "expire",
                "last chance",
                "act now",
                "limited time",
                "hurry",
                "account will be blocked",
                "legal action",
            ]),
            payment_keywords: strings(&[
                "send money",
                "pay",
                "transfer",
                "deposit",
                "recharge",
                "google pay",
                "phonepe",
                "paytm",
                "upi",
                "qr code",
                "screen share",
                "anydesk",
                "teamviewer",
            ]),
            otp_keywords: strings(&[
                "otp",
                "one time password",
                "verification code",
                "cvv",
                "pin",
                "password",
                "share otp",
                "tell me otp",
            ]),
            suspicious_phrases: strings(&[
                "refund process",
                "verification fee",
                "processing charge",
                "courier charges",
                "gst payment",
                "activation fee",
                "wrong payment",
                "cancelled order",
                "bank verification",
            ]),
        }
    }
}

impl ScamPatterns {
    /// Parse a `scam_patterns` JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| CoreError::InvalidPatternDocument {
            document: "scam_patterns",
            source,
        })
    }
}

/// Canonical names of legitimate banks and payment platforms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRegistry {
    pub major_banks: Vec<String>,
    pub payment_platforms: Vec<String>,
}

impl Default for BankRegistry {
    fn default() -> Self {
        Self {
            major_banks: strings(&[
                "SBI",
                "HDFC",
                "ICICI",
                "Axis",
                "Kotak",
                "PNB",
                "BOB",
                "Canara",
                "Union Bank",
                "IDBI",
                "Yes Bank",
                "IndusInd",
            ]),
            payment_platforms: strings(&[
                "Paytm Payments Bank",
                "Airtel Payments Bank",
                "Jio Payments Bank",
                "India Post Payments Bank",
            ]),
        }
    }
}

impl BankRegistry {
    /// Parse a `legitimate_banks` JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| CoreError::InvalidPatternDocument {
            document: "legitimate_banks",
            source,
        })
    }

    /// Major banks followed by payment platforms
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.major_banks
            .iter()
            .chain(self.payment_platforms.iter())
            .map(String::as_str)
    }
}

/// Immutable configuration shared by every analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternStore {
    pub patterns: ScamPatterns,
    pub banks: BankRegistry,
}

impl PatternStore {
    pub fn new(patterns: ScamPatterns, banks: BankRegistry) -> Self {
        log::debug!(
            "Pattern store: {} urgency, {} payment, {} otp, {} suspicious, {} banks",
            patterns.urgency_keywords.len(),
            patterns.payment_keywords.len(),
            patterns.otp_keywords.len(),
            patterns.suspicious_phrases.len(),
            banks.major_banks.len() + banks.payment_platforms.len()
        );
        Self { patterns, banks }
    }
}
