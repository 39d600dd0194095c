//! # shop-telegram
//!
//! Telegram transport layer: adapters between teloxide and [`shop_core`] types, the
//! [`shop_core::Bot`] implementation, transport config and the dispatcher runner.
//! Knows nothing about products or the order flow; every update goes through a [`handler_chain::HandlerChain`].

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{
    keyboard_markup, TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{build_bot, health_router, run, WEBHOOK_PATH};
