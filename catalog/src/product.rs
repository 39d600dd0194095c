//! Product and the ordered, read-only catalog.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

const MAX_KEY_LEN: usize = 48;

/// One purchasable item. Cloned into carts as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub key: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub preview_url: Option<String>,
    /// Checkout link used by the card / CashApp method.
    #[serde(default)]
    pub payment_link: Option<String>,
}

impl Product {
    pub fn new(key: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            price,
            preview_url: None,
            payment_link: None,
        }
    }

    pub fn with_preview(mut self, url: impl Into<String>) -> Self {
        self.preview_url = Some(url.into());
        self
    }

    pub fn with_payment_link(mut self, url: impl Into<String>) -> Self {
        self.payment_link = Some(url.into());
        self
    }
}

/// Products in declaration order with key lookup. No mutation after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty tables, duplicate or malformed keys and non-positive prices.
    /// Keys end up inside callback data, so they are limited to `[a-z0-9_]` and 48 bytes.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if !is_valid_key(&product.key) {
                return Err(CatalogError::InvalidKey(product.key.clone()));
            }
            if product.price <= Decimal::ZERO {
                return Err(CatalogError::InvalidPrice {
                    key: product.key.clone(),
                    price: product.price,
                });
            }
            if index.insert(product.key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateKey(product.key.clone()));
            }
        }
        Ok(Self { products, index })
    }

    pub fn get(&self, key: &str) -> Result<&Product, CatalogError> {
        self.index
            .get(key)
            .map(|&position| &self.products[position])
            .ok_or_else(|| CatalogError::NotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// `(key, product)` pairs in declaration order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &Product)> {
        self.products.iter().map(|p| (p.key.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
