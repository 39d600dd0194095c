//! Bot abstraction for the outbound side of a conversation.
//!
//! [`Bot`] is transport-agnostic; shop-telegram implements it over teloxide and tests substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, OutboundMessage};
use async_trait::async_trait;

/// Sends messages and acknowledges callback events. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message (HTML text, optional inline keyboard) to the given chat.
    async fn send_message(&self, chat: &Chat, message: &OutboundMessage) -> Result<()>;
    /// Acknowledges a callback event so the client stops its loading indicator.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}
