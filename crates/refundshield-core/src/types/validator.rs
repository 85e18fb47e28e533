//! Format validators for phone numbers, UPI IDs and bank names
//!
//! All validators are pure and total: they return a verdict for any input and
//! never fail. Callers decide whether an empty field means "not provided".

use crate::patterns::BankRegistry;
use regex::Regex;
use std::sync::OnceLock;

const INDIA_COUNTRY_CODE: &str = "91";

fn upi_pattern() -> &'static Regex {
    static UPI: OnceLock<Regex> = OnceLock::new();
    UPI.get_or_init(|| Regex::new(r"^[\w.\-]+@\w+$").expect("UPI pattern is a valid regex"))
}

/// Check an Indian mobile number
///
/// Whitespace, hyphens and `+` are removed, then a single leading `91` is
/// stripped. What remains must be ten digits starting with 6, 7, 8 or 9.
pub fn is_valid_indian_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '+')
        .collect();
    let number = cleaned
        .strip_prefix(INDIA_COUNTRY_CODE)
        .unwrap_or(cleaned.as_str());

    let bytes = number.as_bytes();
    bytes.len() == 10
        && matches!(bytes[0], b'6'..=b'9')
        && bytes.iter().all(u8::is_ascii_digit)
}

/// Check UPI ID syntax (`local-part@handle`)
pub fn is_valid_upi(upi_id: &str) -> bool {
    upi_pattern().is_match(upi_id)
}

/// Check a bank name against the registry
///
/// Case-insensitive and bidirectional: a registry name contained in the input
/// matches, and so does an input contained in a registry name. Short registry
/// names (e.g. "BOB") can therefore match unrelated input; this is a heuristic.
pub fn is_legitimate_bank(bank_name: &str, registry: &BankRegistry) -> bool {
    let name = bank_name.to_uppercase();
    registry.all_names().any(|bank| {
        let bank = bank.to_uppercase();
        name.contains(&bank) || bank.contains(&name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_mobile_number() {
        assert!(is_valid_indian_phone("9876543210"));
        assert!(is_valid_indian_phone("6000000000"));
    }

    #[test]
    fn test_country_code_prefix() {
        assert!(is_valid_indian_phone("919876543210"));
        assert!(is_valid_indian_phone("+91 98765 43210"));
        assert!(is_valid_indian_phone("+91-98765-43210"));
    }

    #[test]
    fn test_country_code_stripped_once() {
        // "919123456789" -> "9123456789"
        assert!(is_valid_indian_phone("919123456789"));
        // "91919876543210" -> "919876543210", twelve digits
        assert!(!is_valid_indian_phone("91919876543210"));
    }

    #[test]
    fn test_invalid_phone_numbers() {
        assert!(!is_valid_indian_phone("1234567890"));
        assert!(!is_valid_indian_phone("98765"));
        assert!(!is_valid_indian_phone("98765432100"));
        assert!(!is_valid_indian_phone("98765abcde"));
        assert!(!is_valid_indian_phone(""));
        assert!(!is_valid_indian_phone("(987) 654-3210"));
    }

    #[test]
    fn test_only_ascii_digits_accepted() {
        // Devanagari and full-width digits
        assert!(!is_valid_indian_phone("९८७६५४३२१०"));
        assert!(!is_valid_indian_phone("+91 ९८७६५४३२१०"));
        assert!(!is_valid_indian_phone("９８７６５４３２１０"));
    }

    #[test]
    fn test_upi_ids() {
        assert!(is_valid_upi("user.name@paytm"));
        assert!(is_valid_upi("user-name_1@okaxis"));
        assert!(!is_valid_upi("user@@bank"));
        assert!(!is_valid_upi("noatsymbol"));
        assert!(!is_valid_upi("@paytm"));
        assert!(!is_valid_upi("user@"));
        assert!(!is_valid_upi("user@pay.tm"));
        assert!(!is_valid_upi(""));
    }

    #[test]
    fn test_bank_registry_match() {
        let registry = BankRegistry::default();

        assert!(is_legitimate_bank("HDFC Bank Ltd", &registry));
        assert!(is_legitimate_bank("hdfc", &registry));
        assert!(is_legitimate_bank("Paytm Payments Bank", &registry));
        // input contained in a registry name
        assert!(is_legitimate_bank("Payments", &registry));
        assert!(!is_legitimate_bank("Totally Fake Bank", &registry));
    }

    #[test]
    fn test_bank_custom_registry() {
        let registry = BankRegistry {
            major_banks: vec!["Federal Bank".to_string()],
            payment_platforms: vec![],
        };

        assert!(is_legitimate_bank("FEDERAL BANK", &registry));
        assert!(!is_legitimate_bank("HDFC", &registry));
    }
}
