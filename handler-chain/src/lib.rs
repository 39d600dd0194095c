//! # Handler chain
//!
//! Runs a sequence of handlers for each inbound event: every `before` in order, then `handle` until
//! the first Stop or Handled, then every `after` in reverse order.

mod logging;

pub use logging::LoggingHandler;

use shop_core::{Handler, HandlerResponse, Inbound, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered chain of handlers.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Handled ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs before, handle, then after (reverse). Returns the first Stop or Handled, or Continue.
    #[instrument(skip(self, inbound), fields(chat_id = inbound.chat.id, event = inbound.event.name()))]
    pub async fn handle(&self, inbound: &Inbound) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        debug!(
            user_id = inbound.user.id,
            inbound_id = %inbound.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let should_continue = handler.before(inbound).await?;
            if !should_continue {
                info!(
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(inbound).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "step: handler done"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Handled { .. } => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(inbound, &final_response).await?;
        }

        debug!(
            user_id = inbound.user.id,
            inbound_id = %inbound.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Integration tests live in tests/handler_chain_test.rs
