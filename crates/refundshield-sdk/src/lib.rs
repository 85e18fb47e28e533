//! RefundShield SDK
//!
//! High-level API for building a detection engine and analysing scam reports.

pub mod builder;
pub mod classifier;
pub mod config;
pub mod detection_engine;
pub mod error;
pub mod recommendations;
pub mod rules;

// Re-export main types
pub use builder::DetectionEngineBuilder;
pub use config::EngineConfig;
pub use detection_engine::DetectionEngine;
pub use error::{Result, SdkError};
pub use rules::{Rule, RuleContext, RuleEvaluator, RuleHit, Signal};

// Re-export commonly used types from dependencies
pub use refundshield_core::{
    AnalysisResult, AnalysisSummary, BankRegistry, PatternStore, Recommendation, RedFlag,
    RiskLevel, ScamPatterns, ScamReport, Severity,
};
