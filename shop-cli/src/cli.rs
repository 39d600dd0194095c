//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shopbot")]
#[command(about = "Telegram storefront bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Validate the catalog and print it; path defaults to CATALOG_PATH, then the built-in table.
    Catalog {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}
