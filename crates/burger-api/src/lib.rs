//! # burger-api: Backend Access Layer
//!
//! Everything that talks to the outside world on behalf of the state
//! layer: the [`BurgerApi`] seam, its REST implementation and token
//! storage.
//!
//! ## Module Structure
//! ```text
//! burger_api/
//! ├── client.rs   ← BurgerApi trait (what the state layer calls)
//! ├── http.rs     ← HttpBurgerApi (reqwest, envelopes, token refresh)
//! ├── session.rs  ← SessionStorage + memory / file implementations
//! └── error.rs    ← ApiError
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use burger_api::{BurgerApi, HttpBurgerApi, MemorySessionStorage};
//!
//! # async fn demo() -> burger_api::ApiResult<()> {
//! let api = HttpBurgerApi::new(
//!     "https://norma.nomoreparties.space/api",
//!     Duration::from_secs(10),
//!     Arc::new(MemorySessionStorage::new()),
//! )?;
//! let catalog = api.get_ingredients().await?;
//! println!("{} ingredients", catalog.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod session;

pub use client::BurgerApi;
pub use error::{ApiError, ApiResult, JWT_EXPIRED};
pub use http::{HttpBurgerApi, DEFAULT_TIMEOUT_SECS};
pub use session::{
    FileSessionStorage, MemorySessionStorage, SessionStorage, Tokens, ACCESS_TOKEN_TTL_MINS,
};
