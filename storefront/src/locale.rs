//! User-facing text. One state machine serves every language; a [`Locale`] supplies the strings.
//!
//! Templates use `{name}` placeholders, filled by the machine.

/// Every string the storefront sends, plus the currency symbol and the confirmation keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub currency_symbol: &'static str,
    /// Typed by the buyer to confirm payment; matched trimmed and case-insensitively.
    pub confirm_keyword: &'static str,

    pub welcome: &'static str,
    /// `{url}`
    pub preview: &'static str,
    /// `{name}`, `{price}`
    pub buy_prompt: &'static str,
    pub add_to_cart: &'static str,
    pub buy_now: &'static str,
    pub cancel: &'static str,
    pub view_cart: &'static str,
    pub choose_method: &'static str,

    pub method_paypal: &'static str,
    pub method_binance: &'static str,
    pub method_cashapp: &'static str,
    pub method_giftcard: &'static str,

    pub order_summary: &'static str,
    pub total: &'static str,
    pub payment: &'static str,
    pub paypal_send_to: &'static str,
    pub send_proof: &'static str,
    pub payment_link: &'static str,
    pub support: &'static str,
    pub no_payment_link: &'static str,
    pub giftcard_instructions: &'static str,
    /// `{keyword}`
    pub confirm_hint: &'static str,
    pub support_button: &'static str,
    pub change_method: &'static str,

    /// `{items}`
    pub confirmed: &'static str,
    pub cart_title: &'static str,
    pub cart_empty: &'static str,
    pub cancelled: &'static str,
    pub unknown_product: &'static str,
    pub product_gone: &'static str,
    pub unknown_method: &'static str,
    pub out_of_step: &'static str,
}

impl Locale {
    pub fn english() -> Self {
        Self {
            code: "en",
            currency_symbol: "$",
            confirm_keyword: "confirm",
            welcome: "👋 Welcome! Choose a product below:",
            preview: "🎬 Preview: {url}",
            buy_prompt: "💬 Do you want to buy {name} for {price}?",
            add_to_cart: "🛒 Add to Cart",
            buy_now: "✅ Buy Now",
            cancel: "❌ Cancel",
            view_cart: "🛒 View Cart",
            choose_method: "💰 Choose a payment method:",
            method_paypal: "💳 PayPal",
            method_binance: "🪙 Binance",
            method_cashapp: "💼 CashApp/Apple Pay",
            method_giftcard: "🎁 Rewarble Gift Card",
            order_summary: "🧾 Order Summary",
            total: "Total",
            payment: "Payment",
            paypal_send_to: "Send as family and friends to:",
            send_proof: "Pay then send proof to",
            payment_link: "Payment Link",
            support: "Support",
            no_payment_link: "No payment link for this product, please contact",
            giftcard_instructions: "Buy a card then send it to support to receive your content",
            confirm_hint: "Type {keyword} once you have paid.",
            support_button: "🆘 Support",
            change_method: "🔄 Change Payment Method",
            confirmed: "✅ Thank you! Your order is confirmed: {items}. Support will deliver it once the payment is checked.",
            cart_title: "🛒 Your cart:",
            cart_empty: "🛒 Your cart is empty.",
            cancelled: "❌ Selection cancelled. Choose a product below:",
            unknown_product: "⚠️ That product is not available. Choose another one:",
            product_gone: "⚠️ The selected product is no longer available. Send /start to begin again.",
            unknown_method: "⚠️ Unknown payment method. Choose one below:",
            out_of_step: "⚠️ That option isn't available right now. Send /start to begin again.",
        }
    }

    pub fn portuguese() -> Self {
        Self {
            code: "pt",
            currency_symbol: "$",
            confirm_keyword: "confirmar",
            welcome: "👋 Bem-vindo! Escolha um produto abaixo:",
            preview: "🎬 Prévia: {url}",
            buy_prompt: "💬 Deseja comprar {name} por {price}?",
            add_to_cart: "🛒 Adicionar ao Carrinho",
            buy_now: "✅ Comprar Agora",
            cancel: "❌ Cancelar",
            view_cart: "🛒 Ver Carrinho",
            choose_method: "💰 Escolha a forma de pagamento:",
            method_paypal: "💳 PayPal",
            method_binance: "🪙 Binance",
            method_cashapp: "💼 CashApp/Apple Pay",
            method_giftcard: "🎁 Cartão Presente Rewarble",
            order_summary: "🧾 Resumo do Pedido",
            total: "Total",
            payment: "Pagamento",
            paypal_send_to: "Envie como amigos e familiares para:",
            send_proof: "Pague e envie o comprovante ao",
            payment_link: "Link de Pagamento",
            support: "Suporte",
            no_payment_link: "Sem link de pagamento para este produto, fale com o",
            giftcard_instructions: "Compre o cartão e envie ao suporte para receber o conteúdo",
            confirm_hint: "Digite {keyword} depois de pagar.",
            support_button: "🆘 Suporte",
            change_method: "🔄 Trocar Forma de Pagamento",
            confirmed: "✅ Obrigado! Seu pedido foi confirmado: {items}. O suporte fará a entrega após verificar o pagamento.",
            cart_title: "🛒 Seu carrinho:",
            cart_empty: "🛒 Seu carrinho está vazio.",
            cancelled: "❌ Seleção cancelada. Escolha um produto abaixo:",
            unknown_product: "⚠️ Esse produto não está disponível. Escolha outro:",
            product_gone: "⚠️ O produto selecionado não está mais disponível. Envie /start para recomeçar.",
            unknown_method: "⚠️ Forma de pagamento desconhecida. Escolha uma abaixo:",
            out_of_step: "⚠️ Essa opção não está disponível agora. Envie /start para recomeçar.",
        }
    }

    /// `en` or `pt` (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::english()),
            "pt" => Some(Self::portuguese()),
            _ => None,
        }
    }

    /// Whether free text is the confirmation keyword: trimmed, case-insensitive, exact.
    pub fn is_confirmation(&self, text: &str) -> bool {
        text.trim().to_lowercase() == self.confirm_keyword
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}
