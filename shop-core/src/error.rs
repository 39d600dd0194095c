//! Error types for the storefront core.
//!
//! [`ShopError`] is the top-level error; [`FlowError`] covers recoverable conversation failures.

use thiserror::Error;

/// Top-level error (outbound transport, conversation flow, config, catalog, IO).
#[derive(Error, Debug)]
pub enum ShopError {
    /// The transport failed to deliver a message or an acknowledgement.
    #[error("Outbound send failed: {0}")]
    Outbound(String),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local validation failures of the conversation. Reported to the user, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Unknown payment method: {0}")]
    UnknownMethod(String),

    #[error("Event {event} is not valid in step {step}")]
    InvalidStepTransition { step: String, event: String },
}

/// Result type for core operations; uses [`ShopError`].
pub type Result<T> = std::result::Result<T, ShopError>;
