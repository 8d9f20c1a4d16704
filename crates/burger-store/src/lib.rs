//! # burger-store: Client State Layer
//!
//! Typed state container for the burger-builder client: five slices,
//! a root reducer, a subscribable [`Store`], the async operations that
//! drive it and the route gates that read it.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         burger-store                                    │
//! │                                                                         │
//! │  ┌─────────────┐    ┌──────────────┐    ┌───────────────────────────┐   │
//! │  │ operations/ │───►│    Store     │───►│ RootState                 │   │
//! │  │ (async)     │    │  dispatch()  │    │  user · orders · feed     │   │
//! │  └──────┬──────┘    │  select()    │    │  ingredients · burger     │   │
//! │         │           │  subscribe() │    └───────────────────────────┘   │
//! │         ▼           └──────────────┘                 ▲                  │
//! │    BurgerApi                                         │                  │
//! │    SessionStorage                         selectors.rs · routes.rs      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use burger_store::{root_reducer, Action, Store};
//! use burger_store::slices::user::UserAction;
//!
//! let store = Store::new();
//! assert_eq!(store.snapshot(), root_reducer(None, Action::Init));
//!
//! store.dispatch(UserAction::ClearPasswordReset);
//! assert!(!store.select(|s| s.user.password_reset_requested));
//! ```

pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod operations;
pub mod root;
pub mod routes;
pub mod selectors;
pub mod slices;
pub mod store;

pub use action::{Action, AsyncPhase};
pub use app::App;
pub use config::AppConfig;
pub use error::{StoreError, StoreResult};
pub use operations::PlaceOrderOutcome;
pub use root::{root_reducer, RootState};
pub use routes::{resolve, Gate, Location, Resolution, Route, Screen};
pub use store::Store;
