//! # Actions
//!
//! Every state change is one [`Action`]. Async requests are modelled as
//! three actions sharing a name, one per [`AsyncPhase`].
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Three-Phase Request                                  │
//! │                                                                         │
//! │  operation          dispatch                      slice fields          │
//! │  ─────────          ────────                      ────────────          │
//! │                                                                         │
//! │  start ───────────► Pending ────────────────────► loading = true        │
//! │                                                   error   = None        │
//! │     │                                                                   │
//! │     ├── Ok(v) ────► Fulfilled(v) ───────────────► loading = false       │
//! │     │                                             error   = None        │
//! │     │                                             + slice merges v      │
//! │     │                                                                   │
//! │     └── Err(e) ───► Rejected(Some(e.to_string())) loading = false       │
//! │                     Rejected(None) ─────────────► error = default text  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::slices::constructor::ConstructorAction;
use crate::slices::feed::FeedAction;
use crate::slices::ingredients::IngredientsAction;
use crate::slices::orders::OrdersAction;
use crate::slices::user::UserAction;

/// One phase of an async request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncPhase<T> {
    /// Request sent, no answer yet.
    Pending,
    /// Request succeeded with a payload.
    Fulfilled(T),
    /// Request failed, with the failure message if there is one.
    Rejected(Option<String>),
}

impl<T> AsyncPhase<T> {
    /// Shorthand for a rejection carrying a message.
    pub fn rejected(message: impl Into<String>) -> Self {
        AsyncPhase::Rejected(Some(message.into()))
    }

    /// `pending`, `fulfilled` or `rejected`.
    pub fn name(&self) -> &'static str {
        match self {
            AsyncPhase::Pending => "pending",
            AsyncPhase::Fulfilled(_) => "fulfilled",
            AsyncPhase::Rejected(_) => "rejected",
        }
    }

    /// Applies the shared `loading` / `error` bookkeeping and hands back
    /// the payload when there is one to merge.
    pub fn track(
        self,
        loading: &mut bool,
        error: &mut Option<String>,
        default_error: &str,
    ) -> Option<T> {
        match self {
            AsyncPhase::Pending => {
                *loading = true;
                *error = None;
                None
            }
            AsyncPhase::Fulfilled(payload) => {
                *loading = false;
                *error = None;
                Some(payload)
            }
            AsyncPhase::Rejected(message) => {
                *loading = false;
                *error = Some(message.unwrap_or_else(|| default_error.to_string()));
                None
            }
        }
    }
}

/// Any action the root reducer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Store creation. No slice reacts to it.
    Init,
    Ingredients(IngredientsAction),
    Constructor(ConstructorAction),
    Orders(OrdersAction),
    Feed(FeedAction),
    User(UserAction),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Init => write!(f, "@@init"),
            Action::Ingredients(a) => write!(f, "ingredients/{}", a.name()),
            Action::Constructor(a) => write!(f, "constructor/{}", a.name()),
            Action::Orders(a) => write!(f, "orders/{}", a.name()),
            Action::Feed(a) => write!(f, "feed/{}", a.name()),
            Action::User(a) => write!(f, "user/{}", a.name()),
        }
    }
}

impl From<IngredientsAction> for Action {
    fn from(action: IngredientsAction) -> Self {
        Action::Ingredients(action)
    }
}

impl From<ConstructorAction> for Action {
    fn from(action: ConstructorAction) -> Self {
        Action::Constructor(action)
    }
}

impl From<OrdersAction> for Action {
    fn from(action: OrdersAction) -> Self {
        Action::Orders(action)
    }
}

impl From<FeedAction> for Action {
    fn from(action: FeedAction) -> Self {
        Action::Feed(action)
    }
}

impl From<UserAction> for Action {
    fn from(action: UserAction) -> Self {
        Action::User(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_pending_clears_error() {
        let mut loading = false;
        let mut error = Some("old".to_string());

        let payload = AsyncPhase::<u8>::Pending.track(&mut loading, &mut error, "default");
        assert!(payload.is_none());
        assert!(loading);
        assert!(error.is_none());
    }

    #[test]
    fn test_track_rejected_uses_message_or_default() {
        let mut loading = true;
        let mut error = None;

        AsyncPhase::<u8>::rejected("boom").track(&mut loading, &mut error, "default");
        assert!(!loading);
        assert_eq!(error.as_deref(), Some("boom"));

        AsyncPhase::<u8>::Rejected(None).track(&mut loading, &mut error, "default");
        assert_eq!(error.as_deref(), Some("default"));
    }

    #[test]
    fn test_track_fulfilled_returns_payload() {
        let mut loading = true;
        let mut error = Some("old".to_string());

        let payload = AsyncPhase::Fulfilled(7u8).track(&mut loading, &mut error, "default");
        assert_eq!(payload, Some(7));
        assert!(!loading);
        assert!(error.is_none());
    }

    #[test]
    fn test_action_display() {
        let action: Action = OrdersAction::ClearCurrentOrder.into();
        assert_eq!(action.to_string(), "orders/clearCurrentOrder");

        let action: Action = FeedAction::Fetch(AsyncPhase::Pending).into();
        assert_eq!(action.to_string(), "feed/fetchFeed/pending");
    }
}
