//! # shop-cli
//!
//! Argument parsing and wiring for the `shopbot` binary.

pub mod cli;
pub mod wiring;

pub use cli::{Cli, Commands};
pub use wiring::{build_handler_chain, catalog_report};
