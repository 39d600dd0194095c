//! Adapters between teloxide types and shop_core types.
//! Inbound: Message / CallbackQuery → [`Inbound`]. Outbound: [`Keyboard`] → InlineKeyboardMarkup.

use shop_core::{ButtonAction, Chat, Inbound, Keyboard, ShopError, User};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl TelegramUserWrapper<'_> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn to_core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

/// Wraps a teloxide Message. Only text messages become events.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl TelegramMessageWrapper<'_> {
    pub fn to_inbound(&self) -> Option<Inbound> {
        let text = self.0.text()?;
        let user = self
            .0
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_core())
            .unwrap_or_else(User::unknown);
        Some(Inbound::text(
            self.0.id.to_string(),
            to_core_chat(&self.0.chat),
            user,
            text,
        ))
    }
}

/// Wraps a teloxide CallbackQuery (inline button press).
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl TelegramCallbackWrapper<'_> {
    /// The chat is taken from the message carrying the button; if Telegram no longer has that
    /// message, the presser's private chat is used.
    pub fn to_inbound(&self) -> Inbound {
        let query = self.0;
        let user = TelegramUserWrapper(&query.from).to_core();
        let chat = query
            .message
            .as_ref()
            .map(|m| to_core_chat(m.chat()))
            .unwrap_or_else(|| Chat::private(user.id));
        Inbound::callback(
            query.id.to_string(),
            chat,
            user,
            query.data.as_deref().unwrap_or_default(),
        )
    }
}

/// Converts a core keyboard to Telegram inline markup. Fails on a URL button with an invalid URL.
pub fn keyboard_markup(keyboard: &Keyboard) -> Result<InlineKeyboardMarkup, ShopError> {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| match &button.action {
                    ButtonAction::Callback(data) => Ok(InlineKeyboardButton::callback(
                        button.label.clone(),
                        data.encode(),
                    )),
                    ButtonAction::Url(url) => {
                        let parsed = reqwest::Url::parse(url).map_err(|e| {
                            ShopError::Outbound(format!("Invalid button URL {url}: {e}"))
                        })?;
                        Ok(InlineKeyboardButton::url(button.label.clone(), parsed))
                    }
                })
                .collect::<Result<Vec<_>, ShopError>>()
        })
        .collect::<Result<Vec<_>, ShopError>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}
