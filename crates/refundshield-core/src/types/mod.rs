//! Data model for RefundShield
//!
//! This module contains:
//! - The submitted scam report
//! - Red flags and their severities
//! - The analysis result returned to callers
//! - Format validators used by the rules

pub mod analysis;
pub mod flag;
pub mod report;
pub mod validator;

pub use analysis::{AnalysisResult, AnalysisSummary, Recommendation, RiskLevel};
pub use flag::{RedFlag, Severity};
pub use report::ScamReport;
