//! Builds a small cart from the bundled catalog fixture and prints a running
//! subtotal after each merge.

use anyhow::{Context, Result};
use tuckshop::{
    cart::{CartLine, merge, subtotal},
    fixtures::CatalogFixture,
};

const CATALOG: &str = include_str!("../fixtures/catalog.yaml");

fn main() -> Result<()> {
    let products = CatalogFixture::from_yaml(CATALOG)?.into_products();

    let cola = products
        .iter()
        .find(|p| p.id.as_str() == "cola-330")
        .context("cola missing from catalog")?;
    let flapjack = products
        .iter()
        .find(|p| p.id.as_str() == "flapjack")
        .context("flapjack missing from catalog")?;

    let mut lines: Vec<CartLine> = Vec::new();

    for (product, delta) in [(cola, 2), (flapjack, 1), (cola, 1), (cola, -3)] {
        lines = merge(&lines, product, delta);

        let contents: Vec<String> = lines
            .iter()
            .map(|line| format!("{} x{}", line.product.name, line.qty))
            .collect();

        println!(
            "{delta:+} {:<20} -> [{}] subtotal {} cents",
            product.name,
            contents.join(", "),
            subtotal(&lines)
        );
    }

    Ok(())
}
