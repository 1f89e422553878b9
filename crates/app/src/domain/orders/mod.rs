//! Order, payment, and expense recording.

mod checkout;
mod errors;
mod feed;
mod models;
mod rest;
mod service;

pub use checkout::{CheckoutError, checkout};
pub use errors::OrdersServiceError;
pub use feed::{OrderChange, apply_change};
pub use models::{
    Expense, ExpenseUuid, NewExpense, NewOrder, NewPayment, Order, OrderItem, OrderUuid, Payment,
    PaymentMethod, PaymentUuid,
};
pub use rest::RestOrdersService;
pub use service::{MockOrdersService, OrdersService};
