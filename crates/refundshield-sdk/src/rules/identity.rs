//! Rules that check the contact's phone, UPI ID and bank

use super::{Rule, RuleContext, RuleHit};
use refundshield_core::validator::{is_legitimate_bank, is_valid_indian_phone, is_valid_upi};
use refundshield_core::{RedFlag, Severity};

/// Phone number present but not a valid Indian mobile number
pub struct PhoneFormatRule;

impl Rule for PhoneFormatRule {
    fn id(&self) -> &'static str {
        "phone_format"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        let phone = ctx.phone?;
        (!is_valid_indian_phone(phone))
            .then(|| RuleHit::warning(10, "Phone number format looks suspicious"))
    }
}

/// UPI ID present but malformed
pub struct UpiFormatRule;

impl Rule for UpiFormatRule {
    fn id(&self) -> &'static str {
        "upi_format"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        let upi_id = ctx.upi_id?;
        (!is_valid_upi(upi_id)).then(|| {
            RuleHit::flag(
                15,
                RedFlag::new(
                    Severity::Medium,
                    "Invalid UPI Format",
                    "UPI ID format appears incorrect. Verify with official platform.",
                ),
            )
        })
    }
}

/// Bank name present but not in the registry
pub struct UnknownBankRule;

impl Rule for UnknownBankRule {
    fn id(&self) -> &'static str {
        "unknown_bank"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        let bank_name = ctx.bank_name?;
        (!is_legitimate_bank(bank_name, &ctx.store.banks)).then(|| {
            RuleHit::warning(
                12,
                format!(
                    "Bank name \"{}\" not recognized in major Indian banks list",
                    bank_name
                ),
            )
        })
    }
}
