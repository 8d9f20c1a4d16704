//! # Async Operations
//!
//! Each operation dispatches `Pending`, awaits the API, then dispatches
//! `Fulfilled` or `Rejected`. Failures end up in the slice's `error`
//! field; callers get `None` and may ignore it.
//!
//! ```text
//! operations/
//! ├── catalog.rs  ← fetch_ingredients, fetch_feed
//! ├── orders.rs   ← fetch_orders, create_order, fetch_order_by_number,
//! │                 place_order, close_order_modal
//! └── session.rs  ← register / login / logout (token persistence),
//!                   fetch_user, update_user, password reset, check_user_auth
//! ```

use std::future::Future;

use tracing::warn;

use burger_api::ApiResult;

use crate::action::{Action, AsyncPhase};
use crate::store::Store;

pub mod catalog;
pub mod orders;
pub mod session;

pub use catalog::{fetch_feed, fetch_ingredients};
pub use orders::{
    close_order_modal, create_order, fetch_order_by_number, fetch_orders, place_order,
    PlaceOrderOutcome,
};
pub use session::{
    check_user_auth, fetch_user, login_user, logout_user, register_user, request_password_reset,
    reset_password, update_user,
};

/// Runs one request through the three phases.
///
/// `wrap` turns a phase into the operation's action; it is called once
/// for `Pending` and once for the outcome.
pub(crate) async fn run<T, W, F>(store: &Store, wrap: W, request: F) -> Option<T>
where
    T: Clone,
    W: Fn(AsyncPhase<T>) -> Action,
    F: Future<Output = ApiResult<T>>,
{
    store.dispatch(wrap(AsyncPhase::Pending));

    match request.await {
        Ok(payload) => {
            store.dispatch(wrap(AsyncPhase::Fulfilled(payload.clone())));
            Some(payload)
        }
        Err(e) => {
            let action = wrap(AsyncPhase::rejected(e.to_string()));
            warn!(action = %action, error = %e, "Request rejected");
            store.dispatch(action);
            None
        }
    }
}
