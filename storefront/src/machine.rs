//! The storefront state machine.
//!
//! [`StoreMachine::apply`] is synchronous: a chat's state is fully updated before any message is sent,
//! so a failed send can never leave a half-applied transition behind.

use std::sync::Arc;

use catalog::{Catalog, PaymentDetails, Product};
use shop_core::{FlowError, OutboundMessage, StoreEvent};
use teloxide::utils::html;
use tracing::debug;

use crate::format::{cart_lines, fill, format_price};
use crate::keyboards::{instructions_keyboard, interest_keyboard, payment_keyboard, product_keyboard};
use crate::locale::Locale;
use crate::payment::PaymentMethod;
use crate::state::{ChatSession, Step};

/// Result of applying one event: messages to send, in order, and the recoverable error if any.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Outcome {
    pub replies: Vec<OutboundMessage>,
    pub error: Option<FlowError>,
}

impl Outcome {
    fn none() -> Self {
        Self::default()
    }

    fn reply(message: OutboundMessage) -> Self {
        Self {
            replies: vec![message],
            error: None,
        }
    }

    fn replies(replies: Vec<OutboundMessage>) -> Self {
        Self {
            replies,
            error: None,
        }
    }

    fn rejected(error: FlowError, message: OutboundMessage) -> Self {
        Self {
            replies: vec![message],
            error: Some(error),
        }
    }
}

/// Read-only configuration of the conversation: catalog, payment data, locale.
#[derive(Debug, Clone)]
pub struct StoreMachine {
    catalog: Arc<Catalog>,
    payments: PaymentDetails,
    locale: Locale,
    hide_purchased: bool,
}

impl StoreMachine {
    pub fn new(catalog: Arc<Catalog>, payments: PaymentDetails, locale: Locale) -> Self {
        Self {
            catalog,
            payments,
            locale,
            hide_purchased: false,
        }
    }

    /// Leave products already bought in this chat out of the product keyboard.
    pub fn hide_purchased(mut self, hide: bool) -> Self {
        self.hide_purchased = hide;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Applies `event` to the chat's session and returns what to send.
    ///
    /// Events that do not fit the current step leave the state untouched. Unrecognized callback
    /// data and free text outside the confirmation step are dropped without a reply.
    pub fn apply(&self, session: &mut ChatSession, event: &StoreEvent) -> Outcome {
        let step = session.state.step;
        debug!(step = %step, event = event.name(), "Applying event");

        match (step, event) {
            (_, StoreEvent::Start) => {
                session.state.reset();
                Outcome::reply(self.catalog_message(self.locale.welcome, session))
            }
            (_, StoreEvent::ViewCart) => Outcome::reply(self.cart_message(session)),
            (_, StoreEvent::Unrecognized(_)) => Outcome::none(),
            (Step::AwaitingProduct, StoreEvent::SelectProduct(key)) => {
                self.select_product(session, key)
            }
            (Step::AwaitingInterest, StoreEvent::AddToCart | StoreEvent::BuyNow) => {
                self.add_selected_to_cart(session)
            }
            (Step::AwaitingInterest, StoreEvent::Cancel) => {
                session.state.reset();
                Outcome::reply(self.catalog_message(self.locale.cancelled, session))
            }
            (Step::AwaitingMethod, StoreEvent::SelectMethod(key)) => self.select_method(session, key),
            (Step::AwaitingConfirmation, StoreEvent::ChangeMethod) => {
                session.state.step = Step::AwaitingMethod;
                Outcome::reply(self.method_prompt())
            }
            (Step::AwaitingConfirmation, StoreEvent::Text(text)) => self.confirm(session, text),
            (_, StoreEvent::Text(_)) => Outcome::none(),
            (step, event) => Outcome::rejected(
                FlowError::InvalidStepTransition {
                    step: step.to_string(),
                    event: event.name().to_string(),
                },
                OutboundMessage::text(self.locale.out_of_step),
            ),
        }
    }

    fn select_product(&self, session: &mut ChatSession, key: &str) -> Outcome {
        let product = match self.catalog.get(key) {
            Ok(product) => product,
            Err(_) => {
                return Outcome::rejected(
                    FlowError::UnknownProduct(key.to_string()),
                    self.catalog_message(self.locale.unknown_product, session),
                )
            }
        };

        session.state.selected = Some(key.to_string());
        session.state.step = Step::AwaitingInterest;

        let mut replies = Vec::with_capacity(2);
        if let Some(url) = &product.preview_url {
            replies.push(OutboundMessage::text(fill(
                self.locale.preview,
                &[("url", html::escape(url).as_str())],
            )));
        }
        let prompt = fill(
            self.locale.buy_prompt,
            &[
                ("name", html::bold(&html::escape(&product.name)).as_str()),
                ("price", html::bold(&self.price(product)).as_str()),
            ],
        );
        replies.push(OutboundMessage::with_keyboard(
            prompt,
            interest_keyboard(&self.locale),
        ));
        Outcome::replies(replies)
    }

    fn add_selected_to_cart(&self, session: &mut ChatSession) -> Outcome {
        let selected = session.state.selected.clone().unwrap_or_default();
        let product = match self.catalog.get(&selected) {
            Ok(product) => product.clone(),
            Err(_) => {
                session.state.reset();
                return Outcome::rejected(
                    FlowError::UnknownProduct(selected),
                    OutboundMessage::text(self.locale.product_gone),
                );
            }
        };

        session.state.cart.push(product);
        session.state.step = Step::AwaitingMethod;
        Outcome::reply(self.method_prompt())
    }

    fn select_method(&self, session: &mut ChatSession, key: &str) -> Outcome {
        let method = match key.parse::<PaymentMethod>() {
            Ok(method) => method,
            Err(error) => {
                return Outcome::rejected(
                    error,
                    OutboundMessage::with_keyboard(
                        self.locale.unknown_method,
                        payment_keyboard(&self.locale),
                    ),
                )
            }
        };

        session.state.method = Some(method);
        session.state.step = Step::AwaitingConfirmation;

        let locale = &self.locale;
        let symbol = locale.currency_symbol;
        let mut text = format!(
            "{}\n\n{}\n\n{}\n{}\n\n",
            html::bold(locale.order_summary),
            cart_lines(symbol, &session.state.cart),
            html::bold(&format!(
                "{}: {}",
                locale.total,
                format_price(symbol, session.state.total())
            )),
            html::bold(&format!("{}: {}", locale.payment, method)),
        );
        text.push_str(&self.instructions(method, session));
        text.push_str("\n\n");
        text.push_str(&fill(
            locale.confirm_hint,
            &[("keyword", html::bold(locale.confirm_keyword).as_str())],
        ));

        Outcome::reply(OutboundMessage::with_keyboard(
            text,
            instructions_keyboard(locale, &self.payments.support_url),
        ))
    }

    fn instructions(&self, method: PaymentMethod, session: &ChatSession) -> String {
        let locale = &self.locale;
        let payments = &self.payments;
        let support = html::link(&payments.support_url, locale.support);
        match method {
            PaymentMethod::Paypal => format!(
                "{}\n{} {}\n{} {}",
                locale.method_paypal,
                locale.paypal_send_to,
                html::code_inline(&payments.paypal_email),
                locale.send_proof,
                support,
            ),
            PaymentMethod::Binance => format!(
                "{}\nBTC: {}\nUSDT: {}\n{} {}",
                locale.method_binance,
                html::code_inline(&payments.btc_address),
                html::code_inline(&payments.usdt_address),
                locale.send_proof,
                support,
            ),
            PaymentMethod::CashApp => match self.selected_payment_link(session) {
                Some(link) => format!(
                    "{}\n👉 {}\n{} {}",
                    locale.method_cashapp,
                    html::link(&link, locale.payment_link),
                    locale.send_proof,
                    support,
                ),
                None => format!(
                    "{}\n{} {}",
                    locale.method_cashapp, locale.no_payment_link, support
                ),
            },
            PaymentMethod::GiftCard => format!(
                "{}\n👉 {}\n{}",
                locale.method_giftcard, support, locale.giftcard_instructions
            ),
        }
    }

    /// Payment link of the selected product, from its cart snapshot when present.
    fn selected_payment_link(&self, session: &ChatSession) -> Option<String> {
        let selected = session.state.selected.as_deref()?;
        session
            .state
            .cart
            .iter()
            .rev()
            .find(|p| p.key == selected)
            .and_then(|p| p.payment_link.clone())
            .or_else(|| {
                self.catalog
                    .get(selected)
                    .ok()
                    .and_then(|p| p.payment_link.clone())
            })
    }

    fn confirm(&self, session: &mut ChatSession, text: &str) -> Outcome {
        if !self.locale.is_confirmation(text) {
            return Outcome::none();
        }

        let items = session
            .state
            .cart
            .iter()
            .map(|p| html::escape(&p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let keys: Vec<String> = session.state.cart.iter().map(|p| p.key.clone()).collect();
        session.record_purchase(keys.iter().map(String::as_str));
        session.state.reset();

        Outcome::reply(OutboundMessage::text(fill(
            self.locale.confirmed,
            &[("items", items.as_str())],
        )))
    }

    fn method_prompt(&self) -> OutboundMessage {
        OutboundMessage::with_keyboard(self.locale.choose_method, payment_keyboard(&self.locale))
    }

    fn catalog_message(&self, text: &str, session: &ChatSession) -> OutboundMessage {
        let exclude: &[String] = if self.hide_purchased {
            session.purchased()
        } else {
            &[]
        };
        OutboundMessage::with_keyboard(
            text,
            product_keyboard(&self.catalog, &self.locale, exclude),
        )
    }

    fn cart_message(&self, session: &ChatSession) -> OutboundMessage {
        let cart = &session.state.cart;
        if cart.is_empty() {
            return OutboundMessage::text(self.locale.cart_empty);
        }
        let symbol = self.locale.currency_symbol;
        OutboundMessage::text(format!(
            "{}\n\n{}\n\n{}",
            self.locale.cart_title,
            cart_lines(symbol, cart),
            html::bold(&format!(
                "{}: {}",
                self.locale.total,
                format_price(symbol, session.state.total())
            )),
        ))
    }

    fn price(&self, product: &Product) -> String {
        format_price(self.locale.currency_symbol, product.price)
    }
}
