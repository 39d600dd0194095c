//! Payment methods a buyer can pick.

use std::fmt;
use std::str::FromStr;

use shop_core::FlowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Paypal,
    Binance,
    CashApp,
    GiftCard,
}

impl PaymentMethod {
    /// Keyboard order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Paypal,
        PaymentMethod::Binance,
        PaymentMethod::CashApp,
        PaymentMethod::GiftCard,
    ];

    /// Key used in callback data (`method_<key>`).
    pub fn key(self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Binance => "binance",
            PaymentMethod::CashApp => "cashapp",
            PaymentMethod::GiftCard => "giftcard",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key().to_uppercase())
    }
}

impl FromStr for PaymentMethod {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| FlowError::UnknownMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.key().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_unknown_method() {
        assert_eq!(
            "venmo".parse::<PaymentMethod>(),
            Err(FlowError::UnknownMethod("venmo".to_string()))
        );
        assert!("PayPal".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_display_is_upper_case() {
        assert_eq!(PaymentMethod::Paypal.to_string(), "PAYPAL");
        assert_eq!(PaymentMethod::GiftCard.to_string(), "GIFTCARD");
    }
}
