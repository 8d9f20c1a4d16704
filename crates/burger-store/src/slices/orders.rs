//! # Orders Slice
//!
//! The user's order history and the order shown in the detail modal.
//!
//! ```text
//! fetchOrders         fulfilled ─► orders = payload
//! createOrder         fulfilled ─► orders.insert(0, order); currentOrder = order
//! fetchOrderByNumber  fulfilled ─► currentOrder = payload.first()
//! clearCurrentOrder             ─► currentOrder = None
//! ```
//!
//! All three requests share one `loading` / `error` pair.

use serde::Serialize;

use burger_core::{CreatedOrder, Order};

use crate::action::AsyncPhase;

pub const FETCH_ORDERS_ERROR: &str = "Failed to fetch orders";
pub const CREATE_ORDER_ERROR: &str = "Failed to create order";
pub const FETCH_ORDER_ERROR: &str = "Failed to fetch order";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub current_order: Option<Order>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OrdersState {
    pub fn find(&self, number: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.number == number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrdersAction {
    FetchOrders(AsyncPhase<Vec<Order>>),
    CreateOrder(AsyncPhase<CreatedOrder>),
    /// Payload is the server's list, normally one order or none.
    FetchOrderByNumber(AsyncPhase<Vec<Order>>),
    ClearCurrentOrder,
}

impl OrdersAction {
    pub fn name(&self) -> String {
        match self {
            OrdersAction::FetchOrders(phase) => format!("fetchOrders/{}", phase.name()),
            OrdersAction::CreateOrder(phase) => format!("createOrder/{}", phase.name()),
            OrdersAction::FetchOrderByNumber(phase) => {
                format!("fetchOrderByNumber/{}", phase.name())
            }
            OrdersAction::ClearCurrentOrder => "clearCurrentOrder".to_string(),
        }
    }
}

pub fn reduce(state: &mut OrdersState, action: OrdersAction) {
    match action {
        OrdersAction::FetchOrders(phase) => {
            if let Some(orders) = phase.track(&mut state.loading, &mut state.error, FETCH_ORDERS_ERROR) {
                state.orders = orders;
            }
        }
        OrdersAction::CreateOrder(phase) => {
            if let Some(created) = phase.track(&mut state.loading, &mut state.error, CREATE_ORDER_ERROR) {
                state.orders.insert(0, created.order.clone());
                state.current_order = Some(created.order);
            }
        }
        OrdersAction::FetchOrderByNumber(phase) => {
            if let Some(orders) = phase.track(&mut state.loading, &mut state.error, FETCH_ORDER_ERROR) {
                state.current_order = orders.into_iter().next();
            }
        }
        OrdersAction::ClearCurrentOrder => state.current_order = None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burger_core::OrderStatus;
    use chrono::Utc;

    fn order(number: u64) -> Order {
        Order {
            id: format!("id-{}", number),
            ingredients: vec!["bun".into(), "bun".into()],
            status: OrderStatus::Created,
            name: "Test".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            number,
        }
    }

    #[test]
    fn test_every_pending_sets_loading_and_clears_error() {
        let pending = [
            OrdersAction::FetchOrders(AsyncPhase::Pending),
            OrdersAction::CreateOrder(AsyncPhase::Pending),
            OrdersAction::FetchOrderByNumber(AsyncPhase::Pending),
        ];
        for action in pending {
            let mut state = OrdersState {
                error: Some("old".into()),
                ..Default::default()
            };
            reduce(&mut state, action);
            assert!(state.loading);
            assert!(state.error.is_none());
        }
    }

    #[test]
    fn test_rejected_messages_and_defaults() {
        let cases = [
            (OrdersAction::FetchOrders(AsyncPhase::Rejected(None)), FETCH_ORDERS_ERROR),
            (OrdersAction::CreateOrder(AsyncPhase::Rejected(None)), CREATE_ORDER_ERROR),
            (OrdersAction::FetchOrderByNumber(AsyncPhase::Rejected(None)), FETCH_ORDER_ERROR),
        ];
        for (action, expected) in cases {
            let mut state = OrdersState {
                loading: true,
                ..Default::default()
            };
            reduce(&mut state, action);
            assert!(!state.loading);
            assert_eq!(state.error.as_deref(), Some(expected));
        }

        let mut state = OrdersState::default();
        reduce(&mut state, OrdersAction::CreateOrder(AsyncPhase::rejected("Not enough buns")));
        assert_eq!(state.error.as_deref(), Some("Not enough buns"));
    }

    #[test]
    fn test_fetch_orders_replaces_list() {
        let mut state = OrdersState {
            orders: vec![order(1)],
            ..Default::default()
        };
        reduce(
            &mut state,
            OrdersAction::FetchOrders(AsyncPhase::Fulfilled(vec![order(2), order(3)])),
        );
        let numbers: Vec<u64> = state.orders.iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert!(state.find(3).is_some());
    }

    #[test]
    fn test_create_order_prepends_and_sets_current() {
        let o = order(7);
        let mut state = OrdersState {
            orders: vec![order(1)],
            ..Default::default()
        };
        reduce(
            &mut state,
            OrdersAction::CreateOrder(AsyncPhase::Fulfilled(CreatedOrder {
                order: o.clone(),
                name: "Test".into(),
            })),
        );

        assert_eq!(state.orders[0], o);
        assert_eq!(state.orders.len(), 2);
        assert_eq!(state.current_order, Some(o));
        assert!(!state.loading);
    }

    #[test]
    fn test_fetch_order_by_number_populates_current() {
        let mut state = OrdersState::default();
        reduce(
            &mut state,
            OrdersAction::FetchOrderByNumber(AsyncPhase::Fulfilled(vec![order(42)])),
        );
        assert_eq!(state.current_order.as_ref().map(|o| o.number), Some(42));

        reduce(&mut state, OrdersAction::FetchOrderByNumber(AsyncPhase::Fulfilled(vec![])));
        assert!(state.current_order.is_none());
    }

    #[test]
    fn test_clear_current_order() {
        let mut state = OrdersState {
            current_order: Some(order(1)),
            ..Default::default()
        };
        reduce(&mut state, OrdersAction::ClearCurrentOrder);
        assert!(state.current_order.is_none());
    }
}
