//! # catalog
//!
//! Immutable product table the storefront reads from. [`Catalog::builtin`] is a demo table;
//! [`StoreFile`] loads a replacement (products plus [`PaymentDetails`]) from TOML.

mod builtin;
mod error;
mod payment;
mod product;
mod store_file;

pub use error::CatalogError;
pub use payment::PaymentDetails;
pub use product::{Catalog, Product};
pub use store_file::StoreFile;

pub use rust_decimal::Decimal;
