//! Analysis result definitions

use super::flag::RedFlag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk tier derived from the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Display color (hex) for the tier
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::High => "#dc2626",
        }
    }

    /// Headline shown to the user for the tier
    pub fn message(&self) -> &'static str {
        match self {
            RiskLevel::Low => "✓ Appears Safer - Still Verify",
            RiskLevel::Medium => "⚠️ SUSPICIOUS - VERIFY CAREFULLY",
            RiskLevel::High => "🚨 LIKELY SCAM - DO NOT PROCEED",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled block of safety actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub actions: Vec<String>,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            title: title.into(),
            actions,
        }
    }
}

/// Validator verdicts echoed back with the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub platform: String,

    /// Always present; `false` when no phone was given
    pub phone_verified: bool,

    /// `None` when no UPI ID was given
    pub upi_verified: Option<bool>,

    /// `None` when no bank name was given
    pub bank_recognized: Option<bool>,
}

/// Complete result of analysing one report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Score capped to 0-100
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_color: String,
    pub risk_message: String,
    pub red_flags: Vec<RedFlag>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub analysis: AnalysisSummary,
}

impl AnalysisResult {
    /// Flags with CRITICAL severity, in rule order
    pub fn critical_flags(&self) -> impl Iterator<Item = &RedFlag> {
        self.red_flags.iter().filter(|f| f.is_critical())
    }
}
