//! Rules that scan the lower-cased description
//!
//! Matching is plain substring containment: no tokenisation and no word
//! boundaries, so "pay" also matches inside "payment".

use super::{Rule, RuleContext, RuleHit};
use refundshield_core::{RedFlag, Severity};
use regex::Regex;
use std::sync::OnceLock;

/// Remote-desktop and screen sharing terms
pub const REMOTE_ACCESS_KEYWORDS: [&str; 5] =
    ["anydesk", "teamviewer", "remote", "screen share", "screenshare"];

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| {
        Regex::new(r"https?://|www\.|\.(com|in|net|org)").expect("link pattern is a valid regex")
    })
}

/// Two or more urgency keywords
pub struct UrgencyPressureRule;

impl Rule for UrgencyPressureRule {
    fn id(&self) -> &'static str {
        "urgency_pressure"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        let count = ctx.count_matches(&ctx.store.patterns.urgency_keywords);
        (count >= 2).then(|| {
            RuleHit::flag(
                15,
                RedFlag::new(
                    Severity::High,
                    "Urgency Pressure",
                    format!(
                        "Message contains {} urgency keywords. Scammers create fake urgency to rush victims.",
                        count
                    ),
                ),
            )
        })
    }
}

/// Two or more payment keywords
pub struct PaymentLanguageRule;

impl Rule for PaymentLanguageRule {
    fn id(&self) -> &'static str {
        "payment_language"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        let count = ctx.count_matches(&ctx.store.patterns.payment_keywords);
        (count >= 2).then(|| {
            RuleHit::flag(
                20,
                RedFlag::new(
                    Severity::High,
                    "Payment Request Language",
                    "Message contains payment/transfer keywords. Refunds are credited, not collected.",
                ),
            )
        })
    }
}

/// Known scam phrases, ten points each
pub struct SuspiciousTerminologyRule;

impl Rule for SuspiciousTerminologyRule {
    fn id(&self) -> &'static str {
        "suspicious_terminology"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        let count = ctx.count_matches(&ctx.store.patterns.suspicious_phrases);
        (count >= 1).then(|| {
            RuleHit::flag(
                10 * count as u32,
                RedFlag::new(
                    Severity::Medium,
                    "Suspicious Terminology",
                    format!(
                        "Detected {} common scam phrases like \"verification fee\" or \"processing charge\".",
                        count
                    ),
                ),
            )
        })
    }
}

/// Remote access software or screen sharing mentioned
pub struct RemoteAccessRule;

impl Rule for RemoteAccessRule {
    fn id(&self) -> &'static str {
        "remote_access"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        ctx.contains_any(&REMOTE_ACCESS_KEYWORDS).then(|| {
            RuleHit::flag(
                30,
                RedFlag::new(
                    Severity::Critical,
                    "Remote Access Request",
                    "NEVER install remote access software or share screen with unknown callers. This gives complete device control.",
                ),
            )
        })
    }
}

/// Something that looks like a link
pub struct SuspiciousLinksRule;

impl Rule for SuspiciousLinksRule {
    fn id(&self) -> &'static str {
        "suspicious_links"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        link_pattern().is_match(&ctx.description).then(|| {
            RuleHit::flag(
                15,
                RedFlag::new(
                    Severity::High,
                    "Suspicious Links",
                    "Message contains links. Do not click links from unknown sources.",
                ),
            )
        })
    }
}
