//! Handler trait and handler-chain result type.

use async_trait::async_trait;

use super::event::Inbound;

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain; the event was handled and `sent` messages were delivered.
    Handled { sent: usize },
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Handled → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _inbound: &Inbound) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Handled to end the handle phase. Default: Continue.
    async fn handle(&self, _inbound: &Inbound) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _inbound: &Inbound,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
