//! Scam report definitions

use serde::{Deserialize, Serialize};

/// Facts about a suspicious refund interaction, as submitted by a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamReport {
    /// Platform the contact claimed to represent (e.g. "Amazon")
    pub platform: String,

    /// Phone number the contact used
    #[serde(default)]
    pub phone: Option<String>,

    /// UPI ID the contact shared
    #[serde(default)]
    pub upi_id: Option<String>,

    /// Bank the contact claimed to be from
    #[serde(default)]
    pub bank_name: Option<String>,

    /// Whether the contact asked the user to send money
    #[serde(default)]
    pub asked_money: bool,

    /// Whether the contact asked for an OTP, CVV or PIN
    #[serde(default)]
    pub asked_otp: bool,

    /// Free-text narrative of the interaction
    pub description: String,
}

impl ScamReport {
    /// Create a new report
    pub fn new(platform: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the UPI ID
    pub fn with_upi_id(mut self, upi_id: impl Into<String>) -> Self {
        self.upi_id = Some(upi_id.into());
        self
    }

    /// Set the bank name
    pub fn with_bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = Some(bank_name.into());
        self
    }

    /// Mark that money was requested
    pub fn asked_money(mut self, asked: bool) -> Self {
        self.asked_money = asked;
        self
    }

    /// Mark that an OTP was requested
    pub fn asked_otp(mut self, asked: bool) -> Self {
        self.asked_otp = asked;
        self
    }
}
