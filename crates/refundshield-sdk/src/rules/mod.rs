//! Scoring rules
//!
//! Every rule is an independent object: it inspects a [`RuleContext`] and
//! either stays silent or returns a [`RuleHit`] carrying a score delta and one
//! signal (a red flag or a plain warning). The [`RuleEvaluator`] runs all rules
//! in order; none of them can short-circuit another.

mod context;
mod evaluator;
mod identity;
mod interaction;
mod keywords;

pub use context::RuleContext;
pub use evaluator::{Evaluation, RuleEvaluator};
pub use identity::{PhoneFormatRule, UnknownBankRule, UpiFormatRule};
pub use interaction::{OtpRequestedRule, PaymentRequiredRule};
pub use keywords::{
    PaymentLanguageRule, RemoteAccessRule, SuspiciousLinksRule, SuspiciousTerminologyRule,
    UrgencyPressureRule,
};

use refundshield_core::RedFlag;

/// What a triggered rule contributes to the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Flag(RedFlag),
    Warning(String),
}

/// A triggered rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    /// Score to add; rules never subtract
    pub score: u32,
    pub signal: Signal,
}

impl RuleHit {
    pub fn flag(score: u32, flag: RedFlag) -> Self {
        Self {
            score,
            signal: Signal::Flag(flag),
        }
    }

    pub fn warning(score: u32, message: impl Into<String>) -> Self {
        Self {
            score,
            signal: Signal::Warning(message.into()),
        }
    }
}

/// A single scoring rule
pub trait Rule: Send + Sync {
    /// Stable identifier, reported in logs
    fn id(&self) -> &'static str;

    /// Evaluate the rule against one report
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit>;
}

/// The ten built-in rules, in output order
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(PaymentRequiredRule),
        Box::new(OtpRequestedRule),
        Box::new(UrgencyPressureRule),
        Box::new(PaymentLanguageRule),
        Box::new(SuspiciousTerminologyRule),
        Box::new(PhoneFormatRule),
        Box::new(UpiFormatRule),
        Box::new(UnknownBankRule),
        Box::new(RemoteAccessRule),
        Box::new(SuspiciousLinksRule),
    ]
}
