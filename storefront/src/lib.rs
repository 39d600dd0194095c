//! # storefront
//!
//! The storefront conversation: [`StoreMachine`] applies [`StoreEvent`]s to a chat's [`ChatState`],
//! [`SessionStore`] owns per-chat sessions, and [`StorefrontHandler`] ties both to a [`Bot`] inside a
//! handler chain.
//!
//! [`StoreEvent`]: shop_core::StoreEvent
//! [`Bot`]: shop_core::Bot

mod config;
mod format;
mod handler;
mod keyboards;
mod locale;
mod machine;
mod payment;
mod session;
mod state;

pub use config::StoreConfig;
pub use format::format_price;
pub use handler::StorefrontHandler;
pub use keyboards::{instructions_keyboard, interest_keyboard, payment_keyboard, product_keyboard};
pub use locale::Locale;
pub use machine::{Outcome, StoreMachine};
pub use payment::PaymentMethod;
pub use session::{InMemorySessionStore, SessionStore};
pub use state::{ChatSession, ChatState, Step};
