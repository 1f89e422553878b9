//! Tuckshop storefront CLI

use clap::{Parser, Subcommand};
use rusty_money::{Money, iso};
use tuckshop_app::{config::AppConfig, context::AppContext};

mod cart;
mod catalog;
mod checkout;
mod suggest;

#[derive(Debug, Parser)]
#[command(name = "tuckshop-app", about = "Campus snack storefront", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(catalog::CatalogCommand),
    Cart(cart::CartCommand),
    Checkout(checkout::CheckoutArgs),
    Suggest(suggest::SuggestArgs),
}

impl Cli {
    /// Parse configuration and arguments, reading `.env` first if present.
    pub(crate) fn load() -> Self {
        _ = dotenvy::dotenv();

        Self::parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let Self { config, command } = self;

        let context = AppContext::from_config(&config).map_err(|error| error.to_string())?;

        match command {
            Commands::Catalog(command) => catalog::run(command, &context).await,
            Commands::Cart(command) => cart::run(command, &context).await,
            Commands::Checkout(args) => checkout::run(args, &context).await,
            Commands::Suggest(args) => {
                suggest::run(args, &context, config.autosave.window()).await
            }
        }
    }
}

/// Render a cent amount the way the till displays it.
fn money(cents: u64) -> String {
    Money::from_minor(i64::try_from(cents).unwrap_or(i64::MAX), iso::USD).to_string()
}
