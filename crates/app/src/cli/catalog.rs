//! Catalog commands.

use clap::{Args, Subcommand};
use tabled::{Table, Tabled, settings::Style};
use tuckshop_app::context::AppContext;

use super::money;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// List every product currently on sale
    List,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "id")]
    id: String,

    #[tabled(rename = "name")]
    name: String,

    #[tabled(rename = "category")]
    category: String,

    #[tabled(rename = "price")]
    price: String,

    #[tabled(rename = "in stock")]
    stock: u32,
}

pub(crate) async fn run(command: CatalogCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::List => {
            let products = context
                .catalog
                .active_products()
                .await
                .map_err(|error| error.to_string())?;

            let rows: Vec<ProductRow> = products
                .into_iter()
                .map(|product| ProductRow {
                    id: product.id.to_string(),
                    name: product.name,
                    category: product.category,
                    price: money(product.price_cents),
                    stock: product.stock_qty,
                })
                .collect();

            println!("{}", Table::new(rows).with(Style::psql()));

            Ok(())
        }
    }
}
