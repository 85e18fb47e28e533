//! Basic usage example for refundshield-core
//!
//! Run with: cargo run --example basic_usage

use refundshield_core::validator::{is_legitimate_bank, is_valid_indian_phone, is_valid_upi};
use refundshield_core::{BankRegistry, RedFlag, ScamReport, Severity};

fn main() {
    println!("=== RefundShield Core Basic Usage Example ===\n");

    // Example 1: Building a report
    println!("1. Building a Report:");
    let report = ScamReport::new("Amazon", "Caller asked me to pay a verification fee")
        .with_phone("+91 98765 43210")
        .with_upi_id("refund.desk@okaxis")
        .with_bank_name("HDFC Bank")
        .asked_money(true);
    println!("   {:#?}\n", report);

    // Example 2: Validators
    println!("2. Validators:");
    let registry = BankRegistry::default();
    for phone in ["9876543210", "+91 98765 43210", "1234567890"] {
        println!("   phone {:<18} valid={}", phone, is_valid_indian_phone(phone));
    }
    for upi in ["user.name@paytm", "user@@bank"] {
        println!("   upi   {:<18} valid={}", upi, is_valid_upi(upi));
    }
    for bank in ["HDFC Bank Ltd", "Totally Fake Bank"] {
        println!(
            "   bank  {:<18} recognized={}",
            bank,
            is_legitimate_bank(bank, &registry)
        );
    }
    println!();

    // Example 3: Red flags
    println!("3. Red Flag JSON:");
    let flag = RedFlag::new(
        Severity::Critical,
        "OTP Requested",
        "Never share OTP with anyone.",
    );
    match serde_json::to_string_pretty(&flag) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("   serialization failed: {}", e),
    }
}
