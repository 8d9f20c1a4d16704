//! # State Slices
//!
//! Each slice owns one branch of [`crate::RootState`]: its state type,
//! its action enum and a `reduce` function.
//!
//! ```text
//! slices/
//! ├── ingredients.rs  ← catalog
//! ├── constructor.rs  ← burger being assembled (sync only)
//! ├── orders.rs       ← history + current order
//! ├── feed.rs         ← public feed + counters
//! └── user.rs         ← profile + password-reset flag
//! ```
//!
//! Reducers are synchronous and never fail. Unknown ids, out-of-range
//! moves and the like leave the slice untouched.

pub mod constructor;
pub mod feed;
pub mod ingredients;
pub mod orders;
pub mod user;
