//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use super::{
    errors::OrdersServiceError,
    models::{Expense, NewExpense, NewOrder, NewPayment, Order, Payment},
};

/// Recording surface of the back office.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Record a placed order and return it with its assigned identity.
    async fn place_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Record a payment taken against an order.
    async fn record_payment(&self, payment: NewPayment) -> Result<Payment, OrdersServiceError>;

    /// Record a running expense of the shop.
    async fn record_expense(&self, expense: NewExpense) -> Result<Expense, OrdersServiceError>;

    /// All recorded orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;
}
