//! Inline keyboards for each step of the flow.

use catalog::Catalog;
use shop_core::{Button, CallbackData, Keyboard};

use crate::format::product_line;
use crate::locale::Locale;
use crate::payment::PaymentMethod;

/// Catalog entries two per row in declaration order, skipping `exclude`, then a View cart row.
pub fn product_keyboard(catalog: &Catalog, locale: &Locale, exclude: &[String]) -> Keyboard {
    let buttons: Vec<Button> = catalog
        .list()
        .filter(|(key, _)| !exclude.iter().any(|k| k == key))
        .map(|(key, product)| {
            Button::callback(
                product_line(locale.currency_symbol, product),
                CallbackData::Product(key.to_string()),
            )
        })
        .collect();

    let mut rows: Vec<Vec<Button>> = buttons.chunks(2).map(|pair| pair.to_vec()).collect();
    rows.push(vec![Button::callback(locale.view_cart, CallbackData::ViewCart)]);
    Keyboard::new(rows)
}

/// Add to cart / Buy now / Cancel on one row, View cart below.
pub fn interest_keyboard(locale: &Locale) -> Keyboard {
    Keyboard::new(vec![
        vec![
            Button::callback(locale.add_to_cart, CallbackData::AddToCart),
            Button::callback(locale.buy_now, CallbackData::BuyNow),
            Button::callback(locale.cancel, CallbackData::Cancel),
        ],
        vec![Button::callback(locale.view_cart, CallbackData::ViewCart)],
    ])
}

/// One payment method per row.
pub fn payment_keyboard(locale: &Locale) -> Keyboard {
    let rows = PaymentMethod::ALL
        .into_iter()
        .map(|method| {
            let label = match method {
                PaymentMethod::Paypal => locale.method_paypal,
                PaymentMethod::Binance => locale.method_binance,
                PaymentMethod::CashApp => locale.method_cashapp,
                PaymentMethod::GiftCard => locale.method_giftcard,
            };
            vec![Button::callback(
                label,
                CallbackData::Method(method.key().to_string()),
            )]
        })
        .collect();
    Keyboard::new(rows)
}

/// Support link and Change payment method, shown under the payment instructions.
pub fn instructions_keyboard(locale: &Locale, support_url: &str) -> Keyboard {
    Keyboard::new(vec![
        vec![Button::url(locale.support_button, support_url)],
        vec![Button::callback(locale.change_method, CallbackData::ChangeMethod)],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Decimal, Product};
    use shop_core::ButtonAction;

    fn catalog_of(keys: &[&str]) -> Catalog {
        Catalog::new(
            keys.iter()
                .map(|k| Product::new(*k, k.to_uppercase(), Decimal::new(10, 0)))
                .collect(),
        )
        .unwrap()
    }

    fn row_keys(keyboard: &Keyboard) -> Vec<Vec<String>> {
        keyboard
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| match &b.action {
                        ButtonAction::Callback(data) => data.encode(),
                        ButtonAction::Url(url) => url.clone(),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_product_keyboard_two_per_row() {
        let keyboard = product_keyboard(&catalog_of(&["a", "b", "c"]), &Locale::english(), &[]);
        assert_eq!(
            row_keys(&keyboard),
            vec![
                vec!["product_a".to_string(), "product_b".to_string()],
                vec!["product_c".to_string()],
                vec!["cart".to_string()],
            ]
        );
        assert_eq!(keyboard.rows[0][0].label, "A — $10.00");
    }

    #[test]
    fn test_product_keyboard_excludes_keys() {
        let keyboard = product_keyboard(
            &catalog_of(&["a", "b", "c", "d"]),
            &Locale::english(),
            &["b".to_string()],
        );
        assert_eq!(
            row_keys(&keyboard),
            vec![
                vec!["product_a".to_string(), "product_c".to_string()],
                vec!["product_d".to_string()],
                vec!["cart".to_string()],
            ]
        );
    }

    #[test]
    fn test_payment_keyboard_lists_all_methods() {
        let keyboard = payment_keyboard(&Locale::english());
        assert_eq!(keyboard.rows.len(), 4);
        let data: Vec<String> = keyboard.callbacks().iter().map(|d| d.encode()).collect();
        assert_eq!(
            data,
            vec!["method_paypal", "method_binance", "method_cashapp", "method_giftcard"]
        );
    }

    #[test]
    fn test_instructions_keyboard_has_support_url() {
        let keyboard = instructions_keyboard(&Locale::english(), "https://t.me/support");
        assert_eq!(
            keyboard.rows[0][0].action,
            ButtonAction::Url("https://t.me/support".to_string())
        );
        assert_eq!(keyboard.callbacks(), vec![&CallbackData::ChangeMethod]);
    }
}
