//! RefundShield Core - Core types and definitions for the refund scam detector
//!
//! This crate provides the building blocks shared by the engine and the server:
//! - Report and analysis result types
//! - The pattern store (keyword lists and bank registry)
//! - Phone, UPI and bank validators
//! - Error types

pub mod error;
pub mod patterns;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use patterns::{BankRegistry, PatternStore, ScamPatterns};
pub use types::{
    AnalysisResult, AnalysisSummary, Recommendation, RedFlag, RiskLevel, ScamReport, Severity,
};
pub use types::validator;
