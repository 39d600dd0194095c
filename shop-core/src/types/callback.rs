//! Callback data carried by inline buttons.
//!
//! The wire form is a short string (Telegram caps it at 64 bytes). It is encoded when keyboards are
//! built and decoded once at the transport boundary, so handlers only see [`StoreEvent`]s.
//!
//! [`StoreEvent`]: crate::StoreEvent

const PRODUCT_PREFIX: &str = "product_";
const METHOD_PREFIX: &str = "method_";

const ADD_TO_CART: &str = "add_to_cart";
const BUY_NOW: &str = "buy_now";
const CANCEL: &str = "cancel";
const VIEW_CART: &str = "cart";
const CHANGE_METHOD: &str = "change_method";

/// Structured form of an inline button's callback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackData {
    Product(String),
    AddToCart,
    BuyNow,
    Cancel,
    ViewCart,
    Method(String),
    ChangeMethod,
}

impl CallbackData {
    /// Encodes to the wire string, e.g. `product_savannah` or `method_paypal`.
    pub fn encode(&self) -> String {
        match self {
            CallbackData::Product(key) => format!("{PRODUCT_PREFIX}{key}"),
            CallbackData::Method(method) => format!("{METHOD_PREFIX}{method}"),
            CallbackData::AddToCart => ADD_TO_CART.to_string(),
            CallbackData::BuyNow => BUY_NOW.to_string(),
            CallbackData::Cancel => CANCEL.to_string(),
            CallbackData::ViewCart => VIEW_CART.to_string(),
            CallbackData::ChangeMethod => CHANGE_METHOD.to_string(),
        }
    }

    /// Decodes a wire string. Returns None for anything that is not a known pattern,
    /// including prefixes with an empty payload.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            ADD_TO_CART => return Some(CallbackData::AddToCart),
            BUY_NOW => return Some(CallbackData::BuyNow),
            CANCEL => return Some(CallbackData::Cancel),
            VIEW_CART => return Some(CallbackData::ViewCart),
            CHANGE_METHOD => return Some(CallbackData::ChangeMethod),
            _ => {}
        }
        if let Some(key) = data.strip_prefix(PRODUCT_PREFIX) {
            return (!key.is_empty()).then(|| CallbackData::Product(key.to_string()));
        }
        if let Some(method) = data.strip_prefix(METHOD_PREFIX) {
            return (!method.is_empty()).then(|| CallbackData::Method(method.to_string()));
        }
        None
    }
}
