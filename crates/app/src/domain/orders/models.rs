//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tuckshop::{
    cart::{CartLine, subtotal},
    products::ProductId,
};

use crate::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub uuid: OrderUuid,
    pub items: Vec<OrderItem>,
    pub subtotal_cents: u64,
    pub suggestion: Option<String>,
    pub placed_at: Timestamp,
}

/// One recorded order line, denormalized from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price_cents: u64,
    pub qty: u32,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub subtotal_cents: u64,
    pub suggestion: Option<String>,
}

impl NewOrder {
    /// Build an order record from the cart as it stands.
    #[must_use]
    pub fn from_lines(lines: &[CartLine], suggestion: Option<String>) -> Self {
        let items = lines
            .iter()
            .map(|line| OrderItem {
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                unit_price_cents: line.product.price_cents,
                qty: line.qty,
            })
            .collect();

        Self {
            items,
            subtotal_cents: subtotal(lines),
            suggestion,
        }
    }
}

/// Payment UUID
pub type PaymentUuid = TypedUuid<Payment>;

/// How a payment was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

/// Payment Model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub uuid: PaymentUuid,
    pub order: OrderUuid,
    pub amount_cents: u64,
    pub method: PaymentMethod,
    pub recorded_at: Timestamp,
}

/// New Payment Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPayment {
    pub order: OrderUuid,
    pub amount_cents: u64,
    pub method: PaymentMethod,
}

/// Expense UUID
pub type ExpenseUuid = TypedUuid<Expense>;

/// Expense Model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub uuid: ExpenseUuid,
    pub label: String,
    pub amount_cents: u64,
    pub incurred_at: Timestamp,
}

/// New Expense Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub label: String,
    pub amount_cents: u64,
}

#[cfg(test)]
mod tests {
    use tuckshop::products::Product;

    use super::*;

    fn line(id: &str, price_cents: u64, qty: u32) -> CartLine {
        CartLine {
            product: Product {
                id: ProductId::from(id),
                name: id.to_uppercase(),
                category: "snacks".to_owned(),
                price_cents,
                stock_qty: 10,
                is_active: true,
                photo_url: None,
            },
            qty,
        }
    }

    #[test]
    fn new_order_denormalizes_the_cart() {
        let lines = vec![line("cola", 250, 2), line("flapjack", 180, 1)];

        let order = NewOrder::from_lines(&lines, Some("extra napkins".to_owned()));

        assert_eq!(order.subtotal_cents, 680);
        assert_eq!(order.items.len(), 2);
        assert_eq!(
            order.items.first().map(|item| item.unit_price_cents),
            Some(250)
        );
        assert_eq!(order.suggestion.as_deref(), Some("extra napkins"));
    }
}
