//! Logs each inbound event in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use shop_core::{Handler, HandlerResponse, Inbound, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, inbound))]
    async fn before(&self, inbound: &Inbound) -> Result<bool> {
        info!(
            user_id = inbound.user.id,
            username = %inbound.user.username.as_deref().unwrap_or("unknown"),
            chat_id = inbound.chat.id,
            event = ?inbound.event,
            callback = inbound.is_callback(),
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, inbound, response))]
    async fn after(&self, inbound: &Inbound, response: &HandlerResponse) -> Result<()> {
        debug!(
            inbound_id = %inbound.id,
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}
