//! # shop-core
//!
//! Core types and traits for the storefront bot: [`Bot`], [`Handler`], inbound events and outbound
//! messages, errors, and tracing initialization. Transport-agnostic; used by handler-chain,
//! storefront and shop-telegram.

pub mod bot;
pub mod config;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use config::{env_bool, parse_bool};
pub use error::{FlowError, Result, ShopError};
pub use logger::init_tracing;
pub use types::{
    Button, ButtonAction, CallbackData, Chat, Handler, HandlerResponse, Inbound, Keyboard,
    OutboundMessage, StoreEvent, User,
};
