//! # Order Operations
//!
//! ## Placing an Order
//! ```text
//! place_order
//!   │
//!   ├── no bun, or a request already running ──► Skipped
//!   ├── nobody logged in ──────────────────────► LoginRequired
//!   └── createOrder([bun, ...fillings, bun])
//!           ├── fulfilled ─► Placed(order)   (detail modal opens)
//!           └── rejected ──► Failed          (orders.error set)
//!
//! close_order_modal
//!   clearCurrentOrder, then clearConstructor (two dispatches)
//! ```

use tracing::{debug, info};

use burger_api::BurgerApi;
use burger_core::{CreatedOrder, Order};

use crate::operations::run;
use crate::slices::constructor::ConstructorAction;
use crate::slices::orders::OrdersAction;
use crate::store::Store;

pub async fn fetch_orders(store: &Store, api: &dyn BurgerApi) -> Option<Vec<Order>> {
    run(
        store,
        |phase| OrdersAction::FetchOrders(phase).into(),
        api.get_orders(),
    )
    .await
}

pub async fn create_order(
    store: &Store,
    api: &dyn BurgerApi,
    ingredient_ids: &[String],
) -> Option<CreatedOrder> {
    run(
        store,
        |phase| OrdersAction::CreateOrder(phase).into(),
        api.create_order(ingredient_ids),
    )
    .await
}

/// Fetches one order and makes it the current order.
pub async fn fetch_order_by_number(
    store: &Store,
    api: &dyn BurgerApi,
    number: u64,
) -> Option<Vec<Order>> {
    run(
        store,
        |phase| OrdersAction::FetchOrderByNumber(phase).into(),
        api.get_order_by_number(number),
    )
    .await
}

/// What happened when the order button was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOrderOutcome {
    /// Nothing to submit yet, or a submission is already in flight.
    Skipped,
    /// The user has to log in first.
    LoginRequired,
    /// The server accepted the order.
    Placed(CreatedOrder),
    /// The server refused; see `orders.error`.
    Failed,
}

/// Submits the constructor's burger.
pub async fn place_order(store: &Store, api: &dyn BurgerApi) -> PlaceOrderOutcome {
    let (ids, busy, authenticated) = store.select(|state| {
        (
            state.constructor_burger.order_ingredient_ids(),
            state.orders.loading,
            state.user.is_authenticated(),
        )
    });

    let ids = match ids {
        Ok(ids) if !busy => ids,
        Ok(_) => {
            debug!("Order request already in flight");
            return PlaceOrderOutcome::Skipped;
        }
        Err(e) => {
            debug!(reason = %e, "Nothing to order");
            return PlaceOrderOutcome::Skipped;
        }
    };

    if !authenticated {
        return PlaceOrderOutcome::LoginRequired;
    }

    match create_order(store, api, &ids).await {
        Some(created) => {
            info!(number = created.order.number, "Order placed");
            PlaceOrderOutcome::Placed(created)
        }
        None => PlaceOrderOutcome::Failed,
    }
}

/// Dismisses the order confirmation and starts a fresh burger.
pub fn close_order_modal(store: &Store) {
    store.dispatch(OrdersAction::ClearCurrentOrder);
    store.dispatch(ConstructorAction::Clear);
}
