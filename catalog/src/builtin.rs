//! Demo table used when no store file is configured: landscape prints with example.com links.

use rust_decimal_macros::dec;

use crate::error::CatalogError;
use crate::product::{Catalog, Product};

fn print(key: &str, name: &str, price: rust_decimal::Decimal) -> Product {
    Product::new(key, name, price)
        .with_preview(format!("https://example.com/previews/{key}.jpg"))
        .with_payment_link(format!("https://example.com/checkout/{key}"))
}

impl Catalog {
    /// Built-in demo catalog, in display order.
    pub fn builtin() -> Result<Self, CatalogError> {
        Catalog::new(vec![
            print("canyon", "Canyon", dec!(35)),
            print("savannah", "Savannah", dec!(40)),
            print("glacier", "Glacier", dec!(45)),
            print("desert", "Desert", dec!(30)),
            print("forest", "Forest", dec!(25)),
            print("coastline", "Coastline", dec!(50)),
        ])
    }
}
