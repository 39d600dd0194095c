//! Storefront config: catalog source, locale, keyboard filtering. Loaded from env.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{Catalog, PaymentDetails, StoreFile};
use shop_core::env_bool;
use tracing::warn;

use crate::locale::Locale;
use crate::machine::StoreMachine;

/// Storefront config.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// CATALOG_PATH: TOML store file; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// SHOP_LOCALE: `en` (default) or `pt`.
    pub locale: String,
    /// SHOP_HIDE_PURCHASED: drop already-bought products from the product keyboard.
    pub hide_purchased: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            locale: "en".to_string(),
            hide_purchased: false,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let catalog_path = env::var("CATALOG_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let locale = env::var("SHOP_LOCALE").unwrap_or_else(|_| "en".to_string());
        let hide_purchased = env_bool("SHOP_HIDE_PURCHASED", false)?;
        Ok(Self {
            catalog_path,
            locale,
            hide_purchased,
        })
    }

    /// Fails on an unknown locale. The catalog file is checked by [`StoreConfig::load_store`].
    pub fn validate(&self) -> Result<()> {
        if Locale::from_code(&self.locale).is_none() {
            anyhow::bail!("SHOP_LOCALE must be en or pt, got {:?}", self.locale);
        }
        Ok(())
    }

    /// Loads catalog and payment details from CATALOG_PATH, or the built-in ones.
    pub fn load_store(&self) -> Result<(Catalog, PaymentDetails)> {
        match &self.catalog_path {
            Some(path) => StoreFile::load(path)
                .and_then(StoreFile::into_parts)
                .with_context(|| format!("Failed to load catalog from {}", path.display())),
            None => {
                warn!("CATALOG_PATH not set; serving the demo catalog with placeholder payment details");
                Ok((
                    Catalog::builtin().context("Built-in catalog is invalid")?,
                    PaymentDetails::default(),
                ))
            }
        }
    }

    /// Builds the state machine this config describes.
    pub fn build_machine(&self) -> Result<StoreMachine> {
        self.validate()?;
        let locale = Locale::from_code(&self.locale).unwrap_or_default();
        let (catalog, payments) = self.load_store()?;
        Ok(StoreMachine::new(Arc::new(catalog), payments, locale).hide_purchased(self.hide_purchased))
    }
}
