//! Normalised view of a report, as seen by rules

use refundshield_core::{PatternStore, ScamReport};

/// Input to every rule
///
/// Text fields are trimmed and empty optional fields become `None`, so rules
/// only see "absent" or "present". The description is lower-cased once here.
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    pub platform: &'a str,
    pub phone: Option<&'a str>,
    pub upi_id: Option<&'a str>,
    pub bank_name: Option<&'a str>,
    pub asked_money: bool,
    pub asked_otp: bool,
    /// Lower-cased description
    pub description: String,
    pub store: &'a PatternStore,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl<'a> RuleContext<'a> {
    pub fn new(report: &'a ScamReport, store: &'a PatternStore) -> Self {
        Self {
            platform: report.platform.trim(),
            phone: present(&report.phone),
            upi_id: present(&report.upi_id),
            bank_name: present(&report.bank_name),
            asked_money: report.asked_money,
            asked_otp: report.asked_otp,
            description: report.description.to_lowercase(),
            store,
        }
    }

    /// Number of keywords that occur somewhere in the description
    pub fn count_matches<S: AsRef<str>>(&self, keywords: &[S]) -> usize {
        keywords
            .iter()
            .filter(|k| self.description.contains(k.as_ref()))
            .count()
    }

    pub fn contains_any<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().any(|k| self.description.contains(k.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_absent() {
        let store = PatternStore::default();
        let report = ScamReport::new("  Amazon ", "Hello")
            .with_phone("   ")
            .with_upi_id(" pay@okaxis ");
        let ctx = RuleContext::new(&report, &store);

        assert_eq!(ctx.platform, "Amazon");
        assert!(ctx.phone.is_none());
        assert_eq!(ctx.upi_id, Some("pay@okaxis"));
        assert!(ctx.bank_name.is_none());
        assert_eq!(ctx.description, "hello");
    }

    #[test]
    fn test_count_matches_allows_embedded_keywords() {
        let store = PatternStore::default();
        let report = ScamReport::new("Amazon", "PAYMENT via PayPal");
        let ctx = RuleContext::new(&report, &store);

        // "pay" is counted once even though it occurs twice
        assert_eq!(ctx.count_matches(&["pay", "upi", "payment"]), 2);
        assert!(ctx.contains_any(&["paypal"]));
        assert!(!ctx.contains_any(&["upi"]));
    }
}
