//! shopbot: run the storefront bot or check a catalog. Config from env (.env supported) and CLI args.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use shop_cli::{build_handler_chain, catalog_report, Cli, Commands};
use shop_core::init_tracing;
use shop_telegram::{build_bot, TelegramBotAdapter, TelegramConfig};
use storefront::{InMemorySessionStore, Locale, StoreConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => handle_run(token).await,
        Commands::Catalog { path } => {
            let mut store = StoreConfig::from_env()?;
            if path.is_some() {
                store.catalog_path = path;
            }
            handle_catalog(&store)
        }
    }
}

async fn handle_run(token: Option<String>) -> Result<()> {
    let telegram = TelegramConfig::from_env(token)?;
    telegram.validate()?;
    let store = StoreConfig::from_env()?;
    init_tracing(&telegram.log_file)?;

    let machine = store.build_machine()?;
    info!(
        products = machine.catalog().len(),
        locale = machine.locale().code,
        hide_purchased = store.hide_purchased,
        catalog = %store
            .catalog_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        "Initializing storefront"
    );

    let bot = build_bot(&telegram)?;
    let handler_chain = build_handler_chain(
        Arc::new(TelegramBotAdapter::new(bot.clone())),
        Arc::new(InMemorySessionStore::new()),
        machine,
    );

    info!("Bot started successfully");
    shop_telegram::run(bot, &telegram, handler_chain).await
}

fn handle_catalog(store: &StoreConfig) -> Result<()> {
    store.validate()?;
    let (catalog, payments) = store.load_store()?;
    let locale = Locale::from_code(&store.locale)
        .with_context(|| format!("Unknown locale {:?}", store.locale))?;
    println!("{}", catalog_report(&catalog, &payments, locale.currency_symbol));
    Ok(())
}
