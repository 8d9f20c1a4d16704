//! # burger-core: Pure Domain Logic for Stellar Burgers
//!
//! This crate holds every piece of client logic that does not touch the
//! network, the file system, or the state container.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stellar Burgers Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (CLI / web)                            │   │
//! │  │    Catalog ──► Constructor ──► Order modal ──► Feed / Profile  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ selectors + dispatch                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               burger-store (slices, Store, routes)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ burger-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │   money   │  │constructor │  │ summary   │ │   │
//! │  │   │Ingredient │  │   Money   │  │  bun +     │  │OrderSumm. │ │   │
//! │  │   │  Order    │  │           │  │  fillings  │  │FeedBoard  │ │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain and request types (Ingredient, Order, User, ...)
//! - [`money`] - Integer price type
//! - [`constructor`] - The in-progress burger
//! - [`summary`] - Order detail aggregation and the feed board
//! - [`validation`] - Form validation before user operations
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use burger_core::constructor::BurgerConstructor;
//! use burger_core::types::{Ingredient, IngredientKind};
//!
//! let bun = Ingredient::new("bun-1", "Fluorescent bun", IngredientKind::Bun, 988);
//! let sauce = Ingredient::new("sauce-1", "Spicy-X sauce", IngredientKind::Sauce, 90);
//!
//! let mut burger = BurgerConstructor::new();
//! burger.set_bun(bun);
//! burger.add_ingredient(sauce.into());
//!
//! // The bun is counted twice: top and bottom
//! assert_eq!(burger.total_price().amount(), 988 * 2 + 90);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod constructor;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use constructor::BurgerConstructor;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use summary::{FeedBoard, OrderLine, OrderSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// How many times a bun appears in a burger (top and bottom).
pub const BUN_LAYERS: u32 = 2;

/// Maximum order numbers shown per column on the feed board.
pub const FEED_BOARD_LIMIT: usize = 20;
