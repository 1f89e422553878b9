//! Cart aggregation
//!
//! A cart is an ordered sequence of [`CartLine`]s holding at most one line
//! per product id. [`merge`] is the only mutation path and enforces both
//! invariants: uniqueness by product id, and no stored quantity below one.

use serde::{Deserialize, Serialize};

use crate::products::{Product, ProductId};

/// One cart entry: a product and a strictly positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product being bought
    pub product: Product,

    /// How many units, always at least one
    pub qty: u32,
}

/// Find the line for `id`, if the cart holds one.
#[must_use]
pub fn find_line<'a>(lines: &'a [CartLine], id: &ProductId) -> Option<&'a CartLine> {
    lines.iter().find(|line| &line.product.id == id)
}

/// Fold a quantity delta for `product` into `lines`, returning the new cart.
///
/// A positive delta for an absent product appends a line; a non-positive
/// delta for an absent product is the identity. For a present product the
/// delta is added to the existing quantity in place, and the line is removed
/// outright when the result drops to zero or below. The input is never
/// mutated, so callers can treat this as a pure reducer over UI state.
///
/// Quantities saturate at [`u32::MAX`] rather than wrapping.
#[must_use]
pub fn merge(lines: &[CartLine], product: &Product, delta: i64) -> Vec<CartLine> {
    if find_line(lines, &product.id).is_none() {
        let mut next = lines.to_vec();

        if delta > 0 {
            next.push(CartLine {
                product: product.clone(),
                qty: u32::try_from(delta).unwrap_or(u32::MAX),
            });
        }

        return next;
    }

    lines
        .iter()
        .filter_map(|line| {
            if line.product.id == product.id {
                let new_qty = i64::from(line.qty).saturating_add(delta);

                if new_qty <= 0 {
                    return None;
                }

                Some(CartLine {
                    product: line.product.clone(),
                    qty: u32::try_from(new_qty).unwrap_or(u32::MAX),
                })
            } else {
                Some(line.clone())
            }
        })
        .collect()
}

/// Sum of `price_cents × qty` over every line.
#[must_use]
pub fn subtotal(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .map(|line| line.product.price_cents * u64::from(line.qty))
        .sum()
}
