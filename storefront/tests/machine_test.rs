//! Transition tests for [`storefront::StoreMachine`], driven without a transport.

mod common;

use std::sync::Arc;

use catalog::{Catalog, PaymentDetails, Product};
use rust_decimal_macros::dec;
use shop_core::{ButtonAction, CallbackData, FlowError, StoreEvent};
use storefront::{ChatSession, ChatState, Locale, PaymentMethod, Step, StoreMachine};

fn select(key: &str) -> StoreEvent {
    StoreEvent::SelectProduct(key.to_string())
}

fn method(key: &str) -> StoreEvent {
    StoreEvent::SelectMethod(key.to_string())
}

/// Session driven through the event flow to AwaitingConfirmation with `key` in the cart.
fn session_at_confirmation(machine: &StoreMachine, key: &str, pay: &str) -> ChatSession {
    let mut session = ChatSession::new();
    machine.apply(&mut session, &select(key));
    machine.apply(&mut session, &StoreEvent::AddToCart);
    machine.apply(&mut session, &method(pay));
    assert_eq!(session.state.step, Step::AwaitingConfirmation);
    session
}

/// Session in AwaitingMethod holding snapshots of `keys`, the last one selected.
///
/// Events add one product per order, so a cart with several items is not reachable through the
/// flow; it is built directly to check summaries over more than one item.
fn session_with_cart(machine: &StoreMachine, keys: &[&str]) -> ChatSession {
    let mut session = ChatSession::new();
    session.state = ChatState {
        step: Step::AwaitingMethod,
        selected: keys.last().map(|k| k.to_string()),
        cart: keys
            .iter()
            .map(|k| machine.catalog().get(k).unwrap().clone())
            .collect(),
        method: None,
    };
    session
}

fn single_product_machine() -> StoreMachine {
    let catalog = Catalog::new(vec![Product::new("plain", "Plain", dec!(5))]).unwrap();
    StoreMachine::new(Arc::new(catalog), PaymentDetails::default(), Locale::english())
}

#[test]
fn test_start_always_resets() {
    let machine = common::machine();
    let mut session = session_at_confirmation(&machine, "savannah", "paypal");

    let outcome = machine.apply(&mut session, &StoreEvent::Start);

    assert_eq!(session.state.step, Step::AwaitingProduct);
    assert!(session.state.cart.is_empty());
    assert!(session.state.selected.is_none());
    assert!(session.state.method.is_none());
    assert_eq!(outcome.replies.len(), 1);
    let keyboard = outcome.replies[0].keyboard.as_ref().unwrap();
    assert_eq!(keyboard.rows.len(), 4); // 6 products two per row, plus View cart
}

#[test]
fn test_select_valid_product() {
    let machine = common::machine();
    let mut session = ChatSession::new();

    let outcome = machine.apply(&mut session, &select("savannah"));

    assert_eq!(session.state.step, Step::AwaitingInterest);
    assert_eq!(session.state.selected.as_deref(), Some("savannah"));
    assert!(outcome.error.is_none());
    assert_eq!(outcome.replies.len(), 2);
    assert!(outcome.replies[0]
        .text
        .contains("https://example.com/previews/savannah.jpg"));
    assert!(outcome.replies[1].text.contains("<b>Savannah</b>"));
    assert!(outcome.replies[1].text.contains("<b>$40.00</b>"));
    let callbacks = outcome.replies[1].keyboard.as_ref().unwrap().callbacks();
    assert_eq!(
        callbacks,
        vec![
            &CallbackData::AddToCart,
            &CallbackData::BuyNow,
            &CallbackData::Cancel,
            &CallbackData::ViewCart
        ]
    );
}

#[test]
fn test_select_without_preview_sends_only_prompt() {
    let machine = single_product_machine();
    let mut session = ChatSession::new();

    let outcome = machine.apply(&mut session, &select("plain"));
    assert_eq!(outcome.replies.len(), 1);
}

#[test]
fn test_select_unknown_product_keeps_state() {
    let machine = common::machine();
    let mut session = ChatSession::new();

    let outcome = machine.apply(&mut session, &select("ghost"));

    assert_eq!(session.state, Default::default());
    assert_eq!(outcome.error, Some(FlowError::UnknownProduct("ghost".to_string())));
    assert_eq!(outcome.replies.len(), 1);
    assert!(outcome.replies[0].keyboard.is_some());
}

#[test]
fn test_add_to_cart_and_buy_now_converge() {
    let machine = common::machine();
    for event in [StoreEvent::AddToCart, StoreEvent::BuyNow] {
        let mut session = ChatSession::new();
        machine.apply(&mut session, &select("forest"));

        let outcome = machine.apply(&mut session, &event);

        assert_eq!(session.state.step, Step::AwaitingMethod);
        assert_eq!(session.state.cart.len(), 1);
        assert_eq!(session.state.cart[0].key, "forest");
        assert_eq!(outcome.replies[0].keyboard.as_ref().unwrap().rows.len(), 4);
    }
}

#[test]
fn test_selected_product_gone_resets_flow() {
    let machine = common::machine();
    let mut session = ChatSession::new();
    session.state.step = Step::AwaitingInterest;
    session.state.selected = Some("gone".to_string());

    let outcome = machine.apply(&mut session, &StoreEvent::AddToCart);

    assert_eq!(session.state.step, Step::AwaitingProduct);
    assert!(session.state.cart.is_empty());
    assert!(session.state.selected.is_none());
    assert_eq!(outcome.error, Some(FlowError::UnknownProduct("gone".to_string())));
    assert_eq!(outcome.replies.len(), 1);
    assert_eq!(outcome.replies[0].text, Locale::english().product_gone);
}

#[test]
fn test_cancel_resets_to_product_listing() {
    let machine = common::machine();
    let mut session = ChatSession::new();
    machine.apply(&mut session, &select("forest"));

    let outcome = machine.apply(&mut session, &StoreEvent::Cancel);

    assert_eq!(session.state.step, Step::AwaitingProduct);
    assert!(session.state.selected.is_none());
    assert!(outcome.replies[0].keyboard.is_some());
}

#[test]
fn test_view_cart_does_not_transition() {
    let machine = common::machine();
    let mut session = ChatSession::new();

    let empty = machine.apply(&mut session, &StoreEvent::ViewCart);
    assert!(empty.replies[0].text.contains("empty"));

    machine.apply(&mut session, &select("canyon"));
    machine.apply(&mut session, &StoreEvent::AddToCart);
    let before = session.state.clone();

    let outcome = machine.apply(&mut session, &StoreEvent::ViewCart);

    assert_eq!(session.state, before);
    assert!(outcome.replies[0].text.contains("Canyon — $35.00"));
    assert!(outcome.replies[0].text.contains("Total: $35.00"));
}

#[test]
fn test_total_is_sum_of_cart() {
    let machine = common::machine();
    let mut session = session_with_cart(&machine, &["canyon", "savannah"]);
    assert_eq!(session.state.total(), dec!(75));

    let outcome = machine.apply(&mut session, &method("binance"));

    assert_eq!(session.state.step, Step::AwaitingConfirmation);
    let summary = &outcome.replies[0].text;
    assert!(summary.contains("Canyon — $35.00\nSavannah — $40.00"));
    assert!(summary.contains("Total: $75.00"));
    assert!(summary.contains(&PaymentDetails::default().btc_address));
    assert!(summary.contains("Payment: BINANCE"));
}

#[test]
fn test_unknown_method_stays_awaiting_method() {
    let machine = common::machine();
    let mut session = ChatSession::new();
    machine.apply(&mut session, &select("forest"));
    machine.apply(&mut session, &StoreEvent::AddToCart);

    let outcome = machine.apply(&mut session, &method("venmo"));

    assert_eq!(session.state.step, Step::AwaitingMethod);
    assert!(session.state.method.is_none());
    assert_eq!(outcome.error, Some(FlowError::UnknownMethod("venmo".to_string())));
    assert!(outcome.replies[0].keyboard.is_some());
}

#[test]
fn test_cashapp_uses_selected_product_link() {
    let machine = common::machine();
    let mut session = session_with_cart(&machine, &["canyon", "savannah"]);

    let outcome = machine.apply(&mut session, &method("cashapp"));

    assert_eq!(session.state.method, Some(PaymentMethod::CashApp));
    let text = &outcome.replies[0].text;
    assert!(text.contains("https://example.com/checkout/savannah"));
    assert!(!text.contains("https://example.com/checkout/canyon"));
}

#[test]
fn test_cashapp_without_link_points_to_support() {
    let machine = single_product_machine();
    let mut session = ChatSession::new();
    machine.apply(&mut session, &select("plain"));
    machine.apply(&mut session, &StoreEvent::BuyNow);

    let outcome = machine.apply(&mut session, &method("cashapp"));
    let text = &outcome.replies[0].text;
    assert!(text.contains("No payment link"));
    assert!(text.contains(&PaymentDetails::default().support_url));
}

#[test]
fn test_instructions_keyboard_offers_support_and_change() {
    let machine = common::machine();
    let mut session = ChatSession::new();
    machine.apply(&mut session, &select("forest"));
    machine.apply(&mut session, &StoreEvent::AddToCart);

    let outcome = machine.apply(&mut session, &method("giftcard"));
    let keyboard = outcome.replies[0].keyboard.as_ref().unwrap();
    assert_eq!(
        keyboard.rows[0][0].action,
        ButtonAction::Url(PaymentDetails::default().support_url)
    );
    assert_eq!(keyboard.callbacks(), vec![&CallbackData::ChangeMethod]);
}

#[test]
fn test_change_method_keeps_cart_and_method() {
    let machine = common::machine();
    let mut session = session_at_confirmation(&machine, "glacier", "paypal");
    let cart_before = session.state.cart.clone();

    machine.apply(&mut session, &StoreEvent::ChangeMethod);

    assert_eq!(session.state.step, Step::AwaitingMethod);
    assert_eq!(session.state.cart, cart_before);
    assert_eq!(session.state.method, Some(PaymentMethod::Paypal));

    let outcome = machine.apply(&mut session, &method("giftcard"));
    assert_eq!(session.state.method, Some(PaymentMethod::GiftCard));
    assert!(outcome.replies[0].text.contains("Glacier — $45.00"));
}

#[test]
fn test_confirmation_keyword_variants() {
    let machine = common::machine();
    for word in ["Confirm", " confirm ", "CONFIRM"] {
        let mut session = session_at_confirmation(&machine, "savannah", "paypal");
        let outcome = machine.apply(&mut session, &StoreEvent::Text(word.to_string()));
        assert_eq!(session.state.step, Step::AwaitingProduct, "{word:?}");
        assert!(outcome.replies[0].text.contains("Savannah"));
        assert_eq!(session.purchased(), &["savannah".to_string()]);
    }

    let mut session = session_at_confirmation(&machine, "savannah", "paypal");
    let outcome = machine.apply(&mut session, &StoreEvent::Text("confirmed".to_string()));
    assert_eq!(session.state.step, Step::AwaitingConfirmation);
    assert!(outcome.replies.is_empty());
    assert!(outcome.error.is_none());
}

#[test]
fn test_wrong_step_event_is_rejected_without_change() {
    let machine = common::machine();
    let mut session = ChatSession::new();

    let outcome = machine.apply(&mut session, &StoreEvent::AddToCart);

    assert_eq!(session.state, Default::default());
    assert!(matches!(
        outcome.error,
        Some(FlowError::InvalidStepTransition { ref step, ref event })
            if step == "awaiting_product" && event == "add_to_cart"
    ));
    assert_eq!(outcome.replies.len(), 1);

    let mut session = session_at_confirmation(&machine, "forest", "paypal");
    let before = session.state.clone();
    let outcome = machine.apply(&mut session, &select("savannah"));
    assert_eq!(session.state, before);
    assert!(outcome.error.is_some());
}

#[test]
fn test_silent_events() {
    let machine = common::machine();
    let mut session = ChatSession::new();

    let unknown = machine.apply(&mut session, &StoreEvent::Unrecognized("noop".to_string()));
    let chatter = machine.apply(&mut session, &StoreEvent::Text("hello".to_string()));

    assert_eq!(unknown, Default::default());
    assert_eq!(chatter, Default::default());
    assert_eq!(session.state, Default::default());
}

#[test]
fn test_hide_purchased_filters_keyboard() {
    let machine = common::machine().hide_purchased(true);
    let mut session = session_at_confirmation(&machine, "savannah", "paypal");
    machine.apply(&mut session, &StoreEvent::Text("confirm".to_string()));

    let outcome = machine.apply(&mut session, &StoreEvent::Start);
    let keyboard = outcome.replies[0].keyboard.as_ref().unwrap();
    assert!(!keyboard
        .callbacks()
        .contains(&&CallbackData::Product("savannah".to_string())));
    assert!(keyboard
        .callbacks()
        .contains(&&CallbackData::Product("forest".to_string())));
}

#[test]
fn test_portuguese_locale_confirms_with_its_keyword() {
    let machine = StoreMachine::new(
        Arc::new(Catalog::builtin().unwrap()),
        PaymentDetails::default(),
        Locale::portuguese(),
    );
    let mut session = session_at_confirmation(&machine, "forest", "giftcard");

    machine.apply(&mut session, &StoreEvent::Text("confirm".to_string()));
    assert_eq!(session.state.step, Step::AwaitingConfirmation);

    let outcome = machine.apply(&mut session, &StoreEvent::Text("Confirmar".to_string()));
    assert_eq!(session.state.step, Step::AwaitingProduct);
    assert!(outcome.replies[0].text.contains("Obrigado"));
}
