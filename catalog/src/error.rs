use rust_decimal::Decimal;
use thiserror::Error;

/// Catalog lookup and loading failures.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Catalog has no products")]
    Empty,

    #[error("Duplicate product key: {0}")]
    DuplicateKey(String),

    #[error("Product {key} has a non-positive price: {price}")]
    InvalidPrice { key: String, price: Decimal },

    #[error("Invalid product key {0:?}: use 1-48 chars of a-z, 0-9 or _")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
