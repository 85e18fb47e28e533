//! Unit tests for DetectionEngine

use super::*;
use crate::recommendations::CRITICAL_WARNINGS_TITLE;
use refundshield_core::{RiskLevel, ScamReport, Severity};

#[test]
fn test_engine_default_rules() {
    let engine = DetectionEngine::default();
    assert_eq!(engine.rule_ids().len(), 10);
    assert_eq!(engine.patterns().patterns.otp_keywords.len(), 8);
}

#[test]
fn test_money_and_otp() {
    let engine = DetectionEngine::default();
    let report = ScamReport::new("Amazon", "")
        .with_phone("9876543210")
        .asked_money(true)
        .asked_otp(true);

    let result = engine.analyze(&report);

    assert_eq!(result.risk_score, 75);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.risk_color, "#dc2626");
    assert_eq!(result.critical_flags().count(), 2);
    assert_eq!(result.recommendations.len(), 4);
    assert_eq!(result.recommendations[0].title, CRITICAL_WARNINGS_TITLE);
    assert_eq!(result.recommendations[0].actions.len(), 2);
    assert_eq!(result.recommendations[0].actions[0], result.red_flags[0].explanation);
}

#[test]
fn test_summary_fields() {
    let engine = DetectionEngine::default();
    let report = ScamReport::new(" Flipkart ", "hello")
        .with_phone("+91 98765 43210")
        .with_upi_id("user@@bank")
        .with_bank_name("SBI");

    let result = engine.analyze(&report);

    assert_eq!(result.analysis.platform, "Flipkart");
    assert!(result.analysis.phone_verified);
    assert_eq!(result.analysis.upi_verified, Some(false));
    assert_eq!(result.analysis.bank_recognized, Some(true));
    assert_eq!(result.risk_score, 15);
    assert_eq!(result.red_flags[0].severity, Severity::Medium);
}

#[test]
fn test_absent_fields_in_summary() {
    let engine = DetectionEngine::default();
    let report = ScamReport::new("Flipkart", "hello")
        .with_upi_id("  ")
        .with_bank_name("");

    let result = engine.analyze(&report);

    assert!(!result.analysis.phone_verified);
    assert!(result.analysis.upi_verified.is_none());
    assert!(result.analysis.bank_recognized.is_none());
    assert_eq!(result.risk_score, 0);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_score_is_capped() {
    let engine = DetectionEngine::default();
    let report = ScamReport::new(
        "Amazon",
        "URGENT act now! pay the verification fee and processing charge via upi, install anydesk, visit www.refund.com",
    )
    .with_phone("123")
    .with_upi_id("nope")
    .with_bank_name("Nowhere Trust")
    .asked_money(true)
    .asked_otp(true);

    let result = engine.analyze(&report);
    assert_eq!(result.risk_score, 100);
    assert_eq!(result.risk_level, RiskLevel::High);
}
