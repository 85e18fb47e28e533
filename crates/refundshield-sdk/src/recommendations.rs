//! Safety recommendations for a risk tier

use refundshield_core::{Recommendation, RedFlag, RiskLevel};

/// Title of the block listing critical flag explanations
pub const CRITICAL_WARNINGS_TITLE: &str = "🚨 CRITICAL WARNINGS";

fn block(title: &str, actions: &[&str]) -> Recommendation {
    Recommendation::new(title, actions.iter().map(|a| a.to_string()).collect())
}

/// Static recommendation blocks for a tier
pub fn base_recommendations(level: RiskLevel) -> Vec<Recommendation> {
    match level {
        RiskLevel::High => vec![
            block(
                "STOP ALL COMMUNICATION",
                &[
                    "Do not respond to the caller/message",
                    "Block the phone number immediately",
                    "Do not click any links or download files",
                ],
            ),
            block(
                "REPORT THE SCAM",
                &[
                    "Report to National Cybercrime Helpline: 1930",
                    "File complaint at cybercrime.gov.in",
                    "Report to your bank if you shared any info",
                ],
            ),
            block(
                "PROTECT YOUR ACCOUNT",
                &[
                    "Change passwords if you shared any credentials",
                    "Monitor bank statements for unauthorized transactions",
                    "Enable two-factor authentication on all accounts",
                ],
            ),
        ],
        RiskLevel::Medium => vec![
            block(
                "VERIFY INDEPENDENTLY",
                &[
                    "Contact the platform using official website/app contact",
                    "Do NOT use contact information from the suspicious message",
                    "Check your platform account for any actual refund status",
                ],
            ),
            block(
                "DO NOT SHARE",
                &[
                    "Never share OTP, CVV, or PIN",
                    "Never install remote access apps",
                    "Never send money to \"receive\" a refund",
                ],
            ),
        ],
        RiskLevel::Low => vec![
            block(
                "STILL BE CAUTIOUS",
                &[
                    "Verify through official channels before proceeding",
                    "Remember: Refunds are credited, not collected",
                    "Keep records of all communication",
                ],
            ),
            block(
                "GENERAL SAFETY",
                &[
                    "Never share OTP with anyone",
                    "Check sender details carefully",
                    "Trust your instincts - if it feels wrong, it probably is",
                ],
            ),
        ],
    }
}

/// Recommendations for a tier, led by a critical-warnings block when any
/// CRITICAL flag was raised
pub fn generate(level: RiskLevel, red_flags: &[RedFlag]) -> Vec<Recommendation> {
    let critical: Vec<String> = red_flags
        .iter()
        .filter(|f| f.is_critical())
        .map(|f| f.explanation.clone())
        .collect();

    let mut recommendations = Vec::with_capacity(4);
    if !critical.is_empty() {
        recommendations.push(Recommendation::new(CRITICAL_WARNINGS_TITLE, critical));
    }
    recommendations.extend(base_recommendations(level));
    recommendations
}
