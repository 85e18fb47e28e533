//! Risk tier classification

use refundshield_core::RiskLevel;

/// Scores at or above this are HIGH
pub const HIGH_RISK_THRESHOLD: u32 = 60;

/// Scores at or above this (and below HIGH) are MEDIUM
pub const MEDIUM_RISK_THRESHOLD: u32 = 30;

/// Upper bound of the reported score
pub const MAX_SCORE: u32 = 100;

/// Map a score to its risk tier
///
/// Works on raw or capped scores alike: the cap is above the HIGH threshold,
/// so capping never moves a score across a boundary.
pub fn classify(score: u32) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Clamp a raw score to 0-100
pub fn cap_score(raw: u32) -> u8 {
    raw.min(MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(0), RiskLevel::Low);
        assert_eq!(classify(29), RiskLevel::Low);
        assert_eq!(classify(30), RiskLevel::Medium);
        assert_eq!(classify(59), RiskLevel::Medium);
        assert_eq!(classify(60), RiskLevel::High);
        assert_eq!(classify(100), RiskLevel::High);
    }

    #[test]
    fn test_cap() {
        assert_eq!(cap_score(0), 0);
        assert_eq!(cap_score(75), 75);
        assert_eq!(cap_score(100), 100);
        assert_eq!(cap_score(157), 100);
        assert_eq!(cap_score(u32::MAX), 100);
    }

    #[test]
    fn test_capping_never_changes_tier() {
        for raw in 0..=400 {
            assert_eq!(classify(raw), classify(cap_score(raw) as u32), "raw={}", raw);
        }
    }
}
