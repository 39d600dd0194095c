//! Inbound events: the structured form every transport update is decoded into.

use chrono::{DateTime, Utc};

use super::callback::CallbackData;
use super::chat::Chat;
use super::user::User;

/// What the user did. Callback data and commands are decoded once, at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// `/start`: reset the conversation and show the catalog.
    Start,
    SelectProduct(String),
    AddToCart,
    BuyNow,
    Cancel,
    ViewCart,
    SelectMethod(String),
    ChangeMethod,
    /// Free text that is not a command.
    Text(String),
    /// Callback data that matches no known pattern.
    Unrecognized(String),
}

impl StoreEvent {
    /// Decodes inline button data. Unknown data becomes [`StoreEvent::Unrecognized`].
    pub fn from_callback_data(data: &str) -> Self {
        match CallbackData::parse(data) {
            Some(parsed) => parsed.into(),
            None => StoreEvent::Unrecognized(data.to_string()),
        }
    }

    /// Decodes a text message: `/start` (optionally `/start@botname` and arguments) or plain text.
    pub fn from_text(text: &str) -> Self {
        let command = text
            .split_whitespace()
            .next()
            .map(|word| word.split('@').next().unwrap_or(word));
        match command {
            Some("/start") => StoreEvent::Start,
            _ => StoreEvent::Text(text.to_string()),
        }
    }

    /// Short name for logs and step-mismatch errors.
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::Start => "start",
            StoreEvent::SelectProduct(_) => "select_product",
            StoreEvent::AddToCart => "add_to_cart",
            StoreEvent::BuyNow => "buy_now",
            StoreEvent::Cancel => "cancel",
            StoreEvent::ViewCart => "view_cart",
            StoreEvent::SelectMethod(_) => "select_method",
            StoreEvent::ChangeMethod => "change_method",
            StoreEvent::Text(_) => "text",
            StoreEvent::Unrecognized(_) => "unrecognized",
        }
    }
}

impl From<CallbackData> for StoreEvent {
    fn from(data: CallbackData) -> Self {
        match data {
            CallbackData::Product(key) => StoreEvent::SelectProduct(key),
            CallbackData::AddToCart => StoreEvent::AddToCart,
            CallbackData::BuyNow => StoreEvent::BuyNow,
            CallbackData::Cancel => StoreEvent::Cancel,
            CallbackData::ViewCart => StoreEvent::ViewCart,
            CallbackData::Method(method) => StoreEvent::SelectMethod(method),
            CallbackData::ChangeMethod => StoreEvent::ChangeMethod,
        }
    }
}

/// One inbound update: who, where, what, and the callback id to acknowledge (callback events only).
#[derive(Debug, Clone)]
pub struct Inbound {
    /// Transport-specific id (message id or callback query id).
    pub id: String,
    pub chat: Chat,
    pub user: User,
    pub event: StoreEvent,
    pub callback_id: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl Inbound {
    /// Builds an event from a text message.
    pub fn text(id: impl Into<String>, chat: Chat, user: User, text: &str) -> Self {
        Self {
            id: id.into(),
            chat,
            user,
            event: StoreEvent::from_text(text),
            callback_id: None,
            received_at: Utc::now(),
        }
    }

    /// Builds an event from an inline button press; `callback_id` is acknowledged after handling.
    pub fn callback(callback_id: impl Into<String>, chat: Chat, user: User, data: &str) -> Self {
        let callback_id = callback_id.into();
        Self {
            id: callback_id.clone(),
            chat,
            user,
            event: StoreEvent::from_callback_data(data),
            callback_id: Some(callback_id),
            received_at: Utc::now(),
        }
    }

    pub fn is_callback(&self) -> bool {
        self.callback_id.is_some()
    }
}
