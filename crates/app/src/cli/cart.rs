//! Cart commands.

use clap::{Args, Subcommand};
use tabled::{Table, Tabled, settings::Style};
use tuckshop::{
    cart::{CartLine, find_line, subtotal},
    products::ProductId,
};
use tuckshop_app::context::AppContext;

use super::money;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart as it stands
    Show,

    /// Add units of a product to the cart
    Add(AdjustArgs),

    /// Take units of a product back out of the cart
    Remove(AdjustArgs),

    /// Empty the cart entirely
    Clear,
}

#[derive(Debug, Args)]
struct AdjustArgs {
    /// Product id, as listed by `catalog list`
    product_id: String,

    /// How many units
    #[arg(long, default_value = "1")]
    qty: u32,
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "product")]
    product: String,

    #[tabled(rename = "qty")]
    qty: u32,

    #[tabled(rename = "unit price")]
    unit_price: String,

    #[tabled(rename = "line total")]
    line_total: String,
}

pub(crate) async fn run(command: CartCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        CartSubcommand::Show => {
            let lines = context.carts.load().await;
            print_cart(&lines);

            Ok(())
        }
        CartSubcommand::Add(args) => {
            let id = ProductId::from(args.product_id.as_str());
            let product = context
                .catalog
                .product(&id)
                .await
                .map_err(|error| error.to_string())?;

            let lines = context.carts.adjust(product, i64::from(args.qty)).await;
            print_cart(&lines);

            Ok(())
        }
        CartSubcommand::Remove(args) => {
            let id = ProductId::from(args.product_id.as_str());
            let current = context.carts.load().await;

            // remove against the stored product, so delisted items can
            // still be taken out
            let Some(line) = find_line(&current, &id) else {
                println!("{id} is not in the cart");
                return Ok(());
            };

            let product = line.product.clone();
            let lines = context
                .carts
                .adjust(product, -i64::from(args.qty))
                .await;
            print_cart(&lines);

            Ok(())
        }
        CartSubcommand::Clear => {
            context.carts.clear().await;
            println!("cart cleared");

            Ok(())
        }
    }
}

fn print_cart(lines: &[CartLine]) {
    if lines.is_empty() {
        println!("cart is empty");
        return;
    }

    let rows: Vec<LineRow> = lines
        .iter()
        .map(|line| LineRow {
            product: format!("{} ({})", line.product.name, line.product.id),
            qty: line.qty,
            unit_price: money(line.product.price_cents),
            line_total: money(line.product.price_cents * u64::from(line.qty)),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::psql()));
    println!("subtotal: {}", money(subtotal(lines)));
}
