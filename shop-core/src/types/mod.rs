//! Core types: chat, user, inbound events, callback data, keyboards, and the Handler trait.

mod callback;
mod chat;
mod event;
mod handler;
mod keyboard;
mod user;

pub use callback::CallbackData;
pub use chat::Chat;
pub use event::{Inbound, StoreEvent};
pub use handler::{Handler, HandlerResponse};
pub use keyboard::{Button, ButtonAction, Keyboard, OutboundMessage};
pub use user::User;
