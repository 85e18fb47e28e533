//! Red flag definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a red flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    /// Upper-case label used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A warning signal surfaced to the end user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    pub severity: Severity,

    /// Short label
    pub flag: String,

    /// Human-readable explanation
    pub explanation: String,
}

impl RedFlag {
    /// Create a new red flag
    pub fn new(severity: Severity, flag: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            severity,
            flag: flag.into(),
            explanation: explanation.into(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
