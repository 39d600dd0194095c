//! Outbound message and inline keyboard types.

use super::callback::CallbackData;

/// What pressing a button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Sends callback data back to the bot.
    Callback(CallbackData),
    /// Opens a URL on the client.
    Url(String),
}

/// One inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn callback(label: impl Into<String>, data: CallbackData) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(data),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }
}

/// Inline keyboard: rows of buttons, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Callback data of every callback button, in reading order.
    pub fn callbacks(&self) -> Vec<&CallbackData> {
        self.buttons()
            .filter_map(|b| match &b.action {
                ButtonAction::Callback(data) => Some(data),
                ButtonAction::Url(_) => None,
            })
            .collect()
    }
}

/// A message to send: Telegram-HTML text and an optional inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}
