#![allow(dead_code)]

pub mod mock_bot;

use std::sync::Arc;

use catalog::{Catalog, PaymentDetails};
use shop_core::{Chat, Inbound, User};
use storefront::{InMemorySessionStore, Locale, StoreMachine, StorefrontHandler};

pub use mock_bot::MockBot;

pub const CHAT_ID: i64 = 42;

pub fn machine() -> StoreMachine {
    StoreMachine::new(
        Arc::new(Catalog::builtin().unwrap()),
        PaymentDetails::default(),
        Locale::english(),
    )
}

/// Handler over the built-in catalog with a fresh session store and the given bot.
pub fn handler_with(bot: Arc<MockBot>) -> (StorefrontHandler, Arc<InMemorySessionStore>) {
    let sessions = Arc::new(InMemorySessionStore::new());
    let handler = StorefrontHandler::new(bot, sessions.clone(), Arc::new(machine()));
    (handler, sessions)
}

fn buyer() -> User {
    User {
        id: CHAT_ID,
        username: Some("buyer".to_string()),
        first_name: Some("Buyer".to_string()),
        last_name: None,
    }
}

pub fn text(body: &str) -> Inbound {
    Inbound::text("1", Chat::private(CHAT_ID), buyer(), body)
}

pub fn press(callback_id: &str, data: &str) -> Inbound {
    Inbound::callback(callback_id, Chat::private(CHAT_ID), buyer(), data)
}
