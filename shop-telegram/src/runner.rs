//! Dispatcher runner: Telegram updates become [`shop_core::Inbound`] events for the HandlerChain.
//! PORT always serves `GET /ping`; in webhook mode the same server also takes Telegram's posts.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use handler_chain::HandlerChain;
use shop_core::{Inbound, ShopError};
use teloxide::prelude::*;
use teloxide::types::Update;
use teloxide::update_listeners::webhooks;
use teloxide::dptree;
use tracing::{debug, error, info, instrument, warn};

use crate::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use crate::config::TelegramConfig;

/// Path Telegram posts updates to in webhook mode.
pub const WEBHOOK_PATH: &str = "/telegram-webhook";

const PING_REPLY: &str = "✅ Bot is online!";

/// teloxide Bot for the config's token, pointed at TELEGRAM_API_URL when set.
pub fn build_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match &config.telegram_api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {url}"))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Router with the `GET /ping` health route.
pub fn health_router() -> Router {
    Router::new().route("/ping", get(ping))
}

/// Adds the health route to another router (the webhook router in webhook mode).
pub fn with_health_route(router: Router) -> Router {
    router.merge(health_router())
}

async fn ping() -> &'static str {
    PING_REPLY
}

/// Runs the dispatcher until shutdown (Ctrl-C or the listener stopping).
#[instrument(skip(bot, config, handler_chain), fields(webhook = config.use_webhook, port = config.port))]
pub async fn run(
    bot: teloxide::Bot,
    config: &TelegramConfig,
    handler_chain: HandlerChain,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.username.as_deref().unwrap_or("unknown"),
            "Bot connected"
        ),
        Err(e) => warn!(error = %e, "get_me failed; continuing"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|upd: Arc<Update>| async move {
            debug!(update = ?upd.kind, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Failed to process update",
        ))
        .enable_ctrlc_handler()
        .build();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    if config.use_webhook {
        let url = config.webhook_url()?;
        let (listener, stop_flag, webhook_router) =
            webhooks::axum_to_router(bot, webhooks::Options::new(addr, url.clone()))
                .await
                .context("Failed to set up webhook")?;
        let tcp = bind(addr).await?;
        info!(%url, %addr, "Webhook listener and /ping are up");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(tcp, with_health_route(webhook_router))
                .with_graceful_shutdown(stop_flag)
                .await
            {
                error!(error = %e, "Webhook server failed");
            }
        });

        dispatcher
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    } else {
        let tcp = bind(addr).await?;
        info!(%addr, "Polling for updates; /ping is up");
        tokio::select! {
            _ = dispatcher.dispatch() => {
                info!("Dispatcher stopped");
            }
            served = axum::serve(tcp, health_router()) => {
                served.context("Health route server failed")?;
            }
        }
    }

    info!("Bot stopped");
    Ok(())
}

async fn bind(addr: SocketAddr) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))
}

async fn on_message(msg: Message, chain: HandlerChain) -> Result<(), ShopError> {
    match TelegramMessageWrapper(&msg).to_inbound() {
        Some(inbound) => process(&chain, inbound).await,
        None => {
            debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
            Ok(())
        }
    }
}

async fn on_callback(query: CallbackQuery, chain: HandlerChain) -> Result<(), ShopError> {
    process(&chain, TelegramCallbackWrapper(&query).to_inbound()).await
}

/// Runs the chain; a failure is logged with the chat and returned to the dispatcher's error handler.
async fn process(chain: &HandlerChain, inbound: Inbound) -> Result<(), ShopError> {
    chain.handle(&inbound).await.map(|_| ()).inspect_err(|e| {
        error!(
            error = %e,
            chat_id = inbound.chat.id,
            user_id = inbound.user.id,
            "Handler chain failed"
        );
    })
}
