//! Static payment instructions shown once a method is chosen.

use serde::{Deserialize, Serialize};

/// Where buyers send money and proof of payment. Every field can be overridden from the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentDetails {
    pub paypal_email: String,
    pub btc_address: String,
    pub usdt_address: String,
    pub support_url: String,
}

/// Placeholders; a real shop sets every field in the store file's `[payments]` table.
impl Default for PaymentDetails {
    fn default() -> Self {
        Self {
            paypal_email: "payments@example.com".to_string(),
            btc_address: "bc1q-example-btc-address".to_string(),
            usdt_address: "0x0000000000000000000000000000000000000000".to_string(),
            support_url: "https://example.com/support".to_string(),
        }
    }
}
