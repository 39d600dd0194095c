//! Builds the handler chain the runner dispatches to, and the catalog report.

use std::sync::Arc;

use catalog::{Catalog, PaymentDetails};
use handler_chain::{HandlerChain, LoggingHandler};
use shop_core::Bot;
use storefront::{format_price, SessionStore, StoreMachine, StorefrontHandler};

/// Logging first, then the storefront.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    sessions: Arc<dyn SessionStore>,
    machine: StoreMachine,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StorefrontHandler::new(
            bot,
            sessions,
            Arc::new(machine),
        )))
}

/// One line per product (`key  Name  $40.00`), then the payment details.
pub fn catalog_report(catalog: &Catalog, payments: &PaymentDetails, currency_symbol: &str) -> String {
    let width = catalog.list().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut lines: Vec<String> = catalog
        .list()
        .map(|(key, product)| {
            format!(
                "{key:<width$}  {}  {}",
                product.name,
                format_price(currency_symbol, product.price)
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!("{} products", catalog.len()));
    lines.push(format!("paypal:  {}", payments.paypal_email));
    lines.push(format!("btc:     {}", payments.btc_address));
    lines.push(format!("usdt:    {}", payments.usdt_address));
    lines.push(format!("support: {}", payments.support_url));
    lines.join("\n")
}
