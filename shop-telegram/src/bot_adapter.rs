//! Wraps teloxide::Bot and implements [`shop_core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use shop_core::{Bot as CoreBot, Chat, OutboundMessage, Result, ShopError};
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, ChatId, ParseMode};

use crate::adapters::keyboard_markup;

/// Thin wrapper around teloxide::Bot that implements shop-core's Bot trait. Texts are sent as HTML.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, message: &OutboundMessage) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(chat.id), message.text.clone())
            .parse_mode(ParseMode::Html);
        if let Some(keyboard) = &message.keyboard {
            request = request.reply_markup(keyboard_markup(keyboard)?);
        }
        request
            .await
            .map_err(|e| ShopError::Outbound(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| ShopError::Outbound(e.to_string()))?;
        Ok(())
    }
}
