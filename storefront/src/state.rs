//! Per-chat conversation state.

use std::collections::VecDeque;
use std::fmt;

use catalog::{Decimal, Product};

use crate::payment::PaymentMethod;

/// How many recent callback ids a session remembers for duplicate suppression.
const RECENT_CALLBACKS: usize = 64;

/// Where the chat is in the order flow. Decides which events are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    AwaitingProduct,
    AwaitingInterest,
    AwaitingMethod,
    AwaitingConfirmation,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::AwaitingProduct => "awaiting_product",
            Step::AwaitingInterest => "awaiting_interest",
            Step::AwaitingMethod => "awaiting_method",
            Step::AwaitingConfirmation => "awaiting_confirmation",
        };
        f.write_str(name)
    }
}

/// One in-progress order. `cart` holds snapshots, so catalog changes never touch an open order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub step: Step,
    /// Key of the product being considered; looked up in the catalog, never owned.
    pub selected: Option<String>,
    pub cart: Vec<Product>,
    pub method: Option<PaymentMethod>,
}

impl ChatState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sum of cart prices.
    pub fn total(&self) -> Decimal {
        self.cart.iter().map(|p| p.price).sum()
    }
}

/// Everything the bot keeps about one chat: the order state plus session bookkeeping that
/// survives order resets.
#[derive(Debug, Default)]
pub struct ChatSession {
    pub state: ChatState,
    purchased: Vec<String>,
    recent_callbacks: VecDeque<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a callback id. Returns false if it was already seen (duplicate delivery).
    pub fn mark_callback(&mut self, callback_id: &str) -> bool {
        if self.recent_callbacks.iter().any(|id| id == callback_id) {
            return false;
        }
        if self.recent_callbacks.len() == RECENT_CALLBACKS {
            self.recent_callbacks.pop_front();
        }
        self.recent_callbacks.push_back(callback_id.to_string());
        true
    }

    /// Keys of products whose purchase was confirmed in this chat.
    pub fn purchased(&self) -> &[String] {
        &self.purchased
    }

    pub(crate) fn record_purchase<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        for key in keys {
            if !self.purchased.iter().any(|k| k == key) {
                self.purchased.push(key.to_string());
            }
        }
    }
}
