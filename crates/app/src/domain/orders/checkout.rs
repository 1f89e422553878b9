//! Checkout flow.

use thiserror::Error;
use tracing::info;

use crate::domain::carts::CartsService;

use super::{
    errors::OrdersServiceError,
    models::{NewOrder, Order},
    service::OrdersService,
};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),
}

/// Turn the persisted cart into a recorded order.
///
/// The cart is cleared only once the backend accepts the order; a refused or
/// failed order leaves the cart intact for another attempt.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when there is nothing to order, or
/// the orders service error when recording fails.
pub async fn checkout(
    carts: &dyn CartsService,
    orders: &dyn OrdersService,
    suggestion: Option<String>,
) -> Result<Order, CheckoutError> {
    let lines = carts.load().await;

    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let order = orders
        .place_order(NewOrder::from_lines(&lines, suggestion))
        .await?;

    carts.clear().await;

    info!(order = %order.uuid, subtotal_cents = order.subtotal_cents, "order placed");

    Ok(order)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;
    use tuckshop::{
        cart::CartLine,
        products::{Product, ProductId},
    };

    use crate::domain::{carts::MockCartsService, orders::OrderUuid};

    use super::*;

    fn lines() -> Vec<CartLine> {
        vec![CartLine {
            product: Product {
                id: ProductId::from("cola"),
                name: "Cola".to_owned(),
                category: "drinks".to_owned(),
                price_cents: 250,
                stock_qty: 5,
                is_active: true,
                photo_url: None,
            },
            qty: 2,
        }]
    }

    fn accepted(order: NewOrder) -> Order {
        Order {
            uuid: OrderUuid::generate(),
            items: order.items,
            subtotal_cents: order.subtotal_cents,
            suggestion: order.suggestion,
            placed_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn an_empty_cart_refuses_to_check_out() {
        let mut carts = MockCartsService::new();
        carts.expect_load().returning(Vec::new);
        carts.expect_clear().never();

        let orders = crate::domain::orders::MockOrdersService::new();

        let result = checkout(&carts, &orders, None).await;

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[tokio::test]
    async fn a_successful_order_clears_the_cart() -> TestResult {
        let mut carts = MockCartsService::new();
        carts.expect_load().returning(lines);
        carts.expect_clear().times(1).returning(|| ());

        let mut orders = crate::domain::orders::MockOrdersService::new();
        orders
            .expect_place_order()
            .withf(|order| order.subtotal_cents == 500)
            .returning(|order| Ok(accepted(order)));

        let order = checkout(&carts, &orders, Some("straws please".to_owned())).await?;

        assert_eq!(order.subtotal_cents, 500);
        assert_eq!(order.suggestion.as_deref(), Some("straws please"));

        Ok(())
    }

    #[tokio::test]
    async fn a_refused_order_leaves_the_cart_intact() {
        let mut carts = MockCartsService::new();
        carts.expect_load().returning(lines);
        carts.expect_clear().never();

        let mut orders = crate::domain::orders::MockOrdersService::new();
        orders
            .expect_place_order()
            .returning(|_| Err(OrdersServiceError::Rejected("till closed".to_owned())));

        let result = checkout(&carts, &orders, None).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Orders(OrdersServiceError::Rejected(_)))
        ));
    }
}
