//! Transport config: token, API URL, log path, and how updates arrive (polling or webhook).
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL / TELOXIDE_API_URL, LOG_FILE, USE_WEBHOOK, PORT, HOSTNAME.

use std::env;

use anyhow::{Context, Result};
use shop_core::env_bool;

use crate::runner::WEBHOOK_PATH;

pub const DEFAULT_LOG_FILE: &str = "logs/shopbot.log";
pub const DEFAULT_PORT: u16 = 3000;

/// Telegram transport config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    /// USE_WEBHOOK: receive updates on `HOSTNAME` + [`WEBHOOK_PATH`] instead of long polling.
    pub use_webhook: bool,
    /// PORT: webhook listener in webhook mode, `/ping` route in polling mode.
    pub port: u16,
    /// HOSTNAME: public base URL of this service; required in webhook mode.
    pub hostname: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN when given.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let use_webhook = env_bool("USE_WEBHOOK", false)?;
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let hostname = env::var("HOSTNAME").ok().filter(|s| !s.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            use_webhook,
            port,
            hostname,
        })
    }

    /// Polling config with the given token and defaults for the rest.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            use_webhook: false,
            port: DEFAULT_PORT,
            hostname: None,
        }
    }

    /// Validate config (API URL must parse if set; webhook mode needs a usable HOSTNAME).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.use_webhook {
            self.webhook_url()?;
        }
        Ok(())
    }

    /// `HOSTNAME` + [`WEBHOOK_PATH`]. A HOSTNAME without scheme is taken as https.
    pub fn webhook_url(&self) -> Result<reqwest::Url> {
        let hostname = self
            .hostname
            .as_deref()
            .context("HOSTNAME must be set when USE_WEBHOOK is true")?;
        let base = hostname.trim().trim_end_matches('/');
        let raw = if base.contains("://") {
            format!("{base}{WEBHOOK_PATH}")
        } else {
            format!("https://{base}{WEBHOOK_PATH}")
        };
        reqwest::Url::parse(&raw).with_context(|| format!("HOSTNAME is not a valid URL: {hostname}"))
    }
}
