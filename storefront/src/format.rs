//! Text formatting shared by every summary, label and confirmation. Output is Telegram HTML.

use catalog::{Decimal, Product};
use teloxide::utils::html;

/// Currency symbol plus exactly two decimals, e.g. `$40.00`.
pub fn format_price(symbol: &str, price: Decimal) -> String {
    format!("{symbol}{:.2}", price.round_dp(2))
}

/// `Name — $40.00`, used for keyboard labels and cart lines. Not HTML-escaped.
pub(crate) fn product_line(symbol: &str, product: &Product) -> String {
    format!("{} — {}", product.name, format_price(symbol, product.price))
}

/// Cart lines, one product per line, HTML-escaped.
pub(crate) fn cart_lines(symbol: &str, cart: &[Product]) -> String {
    cart.iter()
        .map(|p| html::escape(&product_line(symbol, p)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fills `{name}`-style placeholders in a locale template.
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}
