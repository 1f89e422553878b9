//! Live order feed.
//!
//! The realtime collaborator delivers row-level changes; the admin dashboard
//! folds them into its order list with this logic. Pure so it can be tested
//! without a transport.

use super::models::{Order, OrderUuid};

/// One change notification for the orders table.
#[derive(Debug, Clone)]
pub enum OrderChange {
    /// An order was created or updated.
    Upserted(Order),

    /// An order was removed.
    Removed(OrderUuid),
}

/// Fold a change into the dashboard's order list.
///
/// Known orders are replaced in place; new ones go to the front, keeping the
/// list newest-first without re-sorting on every notification.
#[must_use]
pub fn apply_change(mut orders: Vec<Order>, change: OrderChange) -> Vec<Order> {
    match change {
        OrderChange::Upserted(order) => {
            if let Some(existing) = orders.iter_mut().find(|o| o.uuid == order.uuid) {
                *existing = order;
            } else {
                orders.insert(0, order);
            }

            orders
        }
        OrderChange::Removed(uuid) => {
            orders.retain(|o| o.uuid != uuid);

            orders
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn order(uuid: OrderUuid, subtotal_cents: u64) -> Order {
        Order {
            uuid,
            items: Vec::new(),
            subtotal_cents,
            suggestion: None,
            placed_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn new_orders_are_inserted_at_the_front() {
        let first = OrderUuid::generate();
        let second = OrderUuid::generate();

        let list = apply_change(Vec::new(), OrderChange::Upserted(order(first, 100)));
        let list = apply_change(list, OrderChange::Upserted(order(second, 200)));

        let uuids: Vec<OrderUuid> = list.iter().map(|o| o.uuid).collect();
        assert_eq!(uuids, vec![second, first]);
    }

    #[test]
    fn an_update_replaces_in_place_without_reordering() {
        let first = OrderUuid::generate();
        let second = OrderUuid::generate();

        let list = vec![order(second, 200), order(first, 100)];
        let list = apply_change(list, OrderChange::Upserted(order(first, 150)));

        assert_eq!(list.len(), 2);
        assert_eq!(list.last().map(|o| o.subtotal_cents), Some(150));
        assert_eq!(list.first().map(|o| o.uuid), Some(second));
    }

    #[test]
    fn removal_drops_only_the_named_order() {
        let first = OrderUuid::generate();
        let second = OrderUuid::generate();

        let list = vec![order(second, 200), order(first, 100)];
        let list = apply_change(list, OrderChange::Removed(second));

        let uuids: Vec<OrderUuid> = list.iter().map(|o| o.uuid).collect();
        assert_eq!(uuids, vec![first]);
    }

    #[test]
    fn removing_an_unknown_order_is_a_no_op() {
        let known = OrderUuid::generate();

        let list = vec![order(known, 100)];
        let list = apply_change(list, OrderChange::Removed(OrderUuid::generate()));

        assert_eq!(list.len(), 1);
    }
}
