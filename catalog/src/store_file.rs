//! TOML store file: a product table plus optional payment details.
//!
//! ```toml
//! [payments]
//! paypal_email = "shop@example.com"
//!
//! [[products]]
//! key = "savannah"
//! name = "Savannah"
//! price = 40
//! preview_url = "https://example.com/preview"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::CatalogError;
use crate::payment::PaymentDetails;
use crate::product::{Catalog, Product};

/// Parsed store file. Call [`StoreFile::into_parts`] to validate the products into a [`Catalog`].
#[derive(Debug, Clone, Deserialize)]
pub struct StoreFile {
    pub products: Vec<Product>,
    #[serde(default)]
    pub payments: PaymentDetails,
}

impl StoreFile {
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let file = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), products = file.products.len(), "Loaded store file");
        Ok(file)
    }

    pub fn into_parts(self) -> Result<(Catalog, PaymentDetails), CatalogError> {
        Ok((Catalog::new(self.products)?, self.payments))
    }
}
