//! # Root State
//!
//! The five slices combined into one tree, and the reducer that routes
//! each [`Action`] to the slice it belongs to.
//!
//! ```text
//! RootState
//! ├── user                 UserState
//! ├── orders               OrdersState
//! ├── ingredients          IngredientsState
//! ├── feed                 FeedState
//! └── constructor_burger   BurgerConstructor
//! ```

use serde::Serialize;

use crate::action::Action;
use crate::slices::constructor::{self, ConstructorState};
use crate::slices::feed::{self, FeedState};
use crate::slices::ingredients::{self, IngredientsState};
use crate::slices::orders::{self, OrdersState};
use crate::slices::user::{self, UserState};

/// The whole client state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootState {
    pub user: UserState,
    pub orders: OrdersState,
    pub ingredients: IngredientsState,
    pub feed: FeedState,
    pub constructor_burger: ConstructorState,
}

/// Applies `action` to `state`, starting from every slice's initial state
/// when there is none yet.
pub fn root_reducer(state: Option<RootState>, action: Action) -> RootState {
    let mut state = state.unwrap_or_default();

    match action {
        Action::Init => {}
        Action::Ingredients(a) => ingredients::reduce(&mut state.ingredients, a),
        Action::Constructor(a) => constructor::reduce(&mut state.constructor_burger, a),
        Action::Orders(a) => orders::reduce(&mut state.orders, a),
        Action::Feed(a) => feed::reduce(&mut state.feed, a),
        Action::User(a) => user::reduce(&mut state.user, a),
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::AsyncPhase;
    use crate::slices::feed::FeedAction;
    use crate::slices::orders::OrdersAction;

    #[test]
    fn test_initial_state_is_every_slice_initial_state() {
        let state = root_reducer(None, Action::Init);

        assert_eq!(
            state,
            RootState {
                user: UserState {
                    user: None,
                    loading: false,
                    error: None,
                    password_reset_requested: false,
                },
                orders: OrdersState {
                    orders: vec![],
                    current_order: None,
                    loading: false,
                    error: None,
                },
                ingredients: IngredientsState {
                    items: vec![],
                    loading: false,
                    error: None,
                },
                feed: FeedState {
                    orders: vec![],
                    total: 0,
                    total_today: 0,
                    loading: false,
                    error: None,
                },
                constructor_burger: ConstructorState {
                    bun: None,
                    ingredients: vec![],
                },
            }
        );
    }

    #[test]
    fn test_action_only_touches_its_slice() {
        let state = root_reducer(None, FeedAction::Fetch(AsyncPhase::Pending).into());
        assert!(state.feed.loading);
        assert!(!state.orders.loading);
        assert!(!state.ingredients.loading);
        assert!(!state.user.loading);

        let state = root_reducer(Some(state), OrdersAction::FetchOrders(AsyncPhase::Pending).into());
        assert!(state.feed.loading);
        assert!(state.orders.loading);
    }

    #[test]
    fn test_snapshot_uses_wire_field_names() {
        let json = serde_json::to_value(RootState::default()).unwrap();
        assert!(json.get("constructorBurger").is_some());
        assert!(json["user"].get("passwordResetRequested").is_some());
        assert!(json["feed"].get("totalToday").is_some());
    }
}
