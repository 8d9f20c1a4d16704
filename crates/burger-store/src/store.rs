//! # Store
//!
//! The single owner of [`RootState`]. Cheap to clone; every clone sees the
//! same state.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store::dispatch                                 │
//! │                                                                         │
//! │  action ──► watch::Sender::send_modify ──► root_reducer(state, action)  │
//! │                        │                                                │
//! │                        └──► every watch::Receiver marked changed        │
//! │                                                                         │
//! │  NOTE: The reducer runs under the channel's write lock, so dispatches   │
//! │        from concurrent tasks are applied one at a time.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::action::Action;
use crate::root::{root_reducer, RootState};

/// Handle to the shared state tree.
#[derive(Debug, Clone)]
pub struct Store {
    state: Arc<watch::Sender<RootState>>,
}

impl Store {
    /// Creates a store holding every slice's initial state.
    pub fn new() -> Self {
        Self::with_state(root_reducer(None, Action::Init))
    }

    /// Creates a store from an existing snapshot.
    pub fn with_state(state: RootState) -> Self {
        let (sender, _) = watch::channel(state);
        Store {
            state: Arc::new(sender),
        }
    }

    /// Runs `action` through the root reducer and notifies subscribers.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        debug!(action = %action, "dispatch");

        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = root_reducer(Some(current), action);
        });
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust
    /// # let store = burger_store::Store::new();
    /// let loading = store.select(|state| state.ingredients.loading);
    /// # assert!(!loading);
    /// ```
    pub fn select<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RootState) -> R,
    {
        f(&self.state.borrow())
    }

    /// A copy of the whole tree.
    pub fn snapshot(&self) -> RootState {
        self.state.borrow().clone()
    }

    /// A receiver that is marked changed after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
