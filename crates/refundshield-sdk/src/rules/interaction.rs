//! Rules driven by what the contact asked for

use super::{Rule, RuleContext, RuleHit};
use refundshield_core::{RedFlag, Severity};

/// The contact asked the user to send money
pub struct PaymentRequiredRule;

impl Rule for PaymentRequiredRule {
    fn id(&self) -> &'static str {
        "payment_required"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        ctx.asked_money.then(|| {
            RuleHit::flag(
                40,
                RedFlag::new(
                    Severity::Critical,
                    "Payment Required for Refund",
                    "Legitimate refunds NEVER require you to send money first. This is a classic scam tactic.",
                ),
            )
        })
    }
}

/// The contact asked for an OTP, CVV or PIN
pub struct OtpRequestedRule;

impl Rule for OtpRequestedRule {
    fn id(&self) -> &'static str {
        "otp_requested"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        ctx.asked_otp.then(|| {
            RuleHit::flag(
                35,
                RedFlag::new(
                    Severity::Critical,
                    "OTP Requested",
                    "Never share OTP with anyone. Banks/companies never ask for OTP. This can drain your account.",
                ),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Signal;
    use refundshield_core::{PatternStore, ScamReport};

    #[test]
    fn test_payment_required() {
        let store = PatternStore::default();
        let report = ScamReport::new("Amazon", "").asked_money(true);
        let hit = PaymentRequiredRule
            .evaluate(&RuleContext::new(&report, &store))
            .unwrap();

        assert_eq!(hit.score, 40);
        assert!(matches!(hit.signal, Signal::Flag(ref f) if f.is_critical()));
    }

    #[test]
    fn test_otp_requested() {
        let store = PatternStore::default();
        let report = ScamReport::new("Amazon", "").asked_otp(true);
        let ctx = RuleContext::new(&report, &store);

        assert_eq!(OtpRequestedRule.evaluate(&ctx).map(|h| h.score), Some(35));
        assert!(PaymentRequiredRule.evaluate(&ctx).is_none());
    }

    #[test]
    fn test_otp_text_alone_does_not_trigger() {
        let store = PatternStore::default();
        let report = ScamReport::new("Amazon", "he asked for my otp");

        assert!(OtpRequestedRule
            .evaluate(&RuleContext::new(&report, &store))
            .is_none());
    }
}
