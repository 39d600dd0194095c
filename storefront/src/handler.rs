//! Handler that runs the storefront conversation for each inbound event.

use std::sync::Arc;

use async_trait::async_trait;
use shop_core::{Bot, Chat, Handler, HandlerResponse, Inbound, OutboundMessage, Result};
use tracing::{error, info, instrument, warn};

use crate::machine::StoreMachine;
use crate::session::SessionStore;

/// Applies inbound events to the chat's session, sends the replies, then acknowledges callbacks.
///
/// The chat's session stays locked until the last reply is sent, so two events of the same chat
/// never interleave. A failed send is returned as an error; the state change is kept.
pub struct StorefrontHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<dyn SessionStore>,
    machine: Arc<StoreMachine>,
}

impl StorefrontHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        sessions: Arc<dyn SessionStore>,
        machine: Arc<StoreMachine>,
    ) -> Self {
        Self {
            bot,
            sessions,
            machine,
        }
    }

    /// Sends in order and stops at the first failure. Returns how many were delivered.
    async fn deliver(&self, chat: &Chat, replies: &[OutboundMessage]) -> Result<usize> {
        for (sent, message) in replies.iter().enumerate() {
            if let Err(e) = self.bot.send_message(chat, message).await {
                error!(chat_id = chat.id, delivered = sent, error = %e, "Failed to send reply");
                return Err(e);
            }
        }
        Ok(replies.len())
    }

    async fn acknowledge(&self, inbound: &Inbound) -> Result<()> {
        let Some(callback_id) = inbound.callback_id.as_deref() else {
            return Ok(());
        };
        self.bot.answer_callback(callback_id).await.inspect_err(|e| {
            error!(chat_id = inbound.chat.id, callback_id, error = %e, "Failed to acknowledge callback");
        })
    }
}

#[async_trait]
impl Handler for StorefrontHandler {
    #[instrument(skip(self, inbound), fields(chat_id = inbound.chat.id, event = inbound.event.name()))]
    async fn handle(&self, inbound: &Inbound) -> Result<HandlerResponse> {
        let session = self.sessions.session(inbound.chat.id).await;
        let mut session = session.lock().await;

        if let Some(callback_id) = inbound.callback_id.as_deref() {
            if !session.mark_callback(callback_id) {
                info!(callback_id, "Duplicate callback, acknowledging only");
                self.acknowledge(inbound).await?;
                return Ok(HandlerResponse::Stop);
            }
        }

        let from = session.state.step;
        let outcome = self.machine.apply(&mut session, &inbound.event);
        if let Some(flow_error) = &outcome.error {
            warn!(step = %from, error = %flow_error, "Event rejected");
        }
        info!(
            from = %from,
            to = %session.state.step,
            cart_len = session.state.cart.len(),
            replies = outcome.replies.len(),
            "Event applied"
        );

        let delivered = self.deliver(&inbound.chat, &outcome.replies).await;
        let acknowledged = self.acknowledge(inbound).await;
        let sent = delivered?;
        acknowledged?;

        Ok(HandlerResponse::Handled { sent })
    }
}
