//! # API Seam
//!
//! The [`BurgerApi`] trait is everything the state layer knows about the
//! backend. Production uses [`crate::HttpBurgerApi`]; tests plug in fakes.

use async_trait::async_trait;

use burger_core::{
    AuthSession, CreatedOrder, FeedSnapshot, Ingredient, LoginData, Order, RegisterData,
    ResetPasswordData, User, UserUpdate,
};

use crate::error::ApiResult;

/// Remote operations of the burger service.
///
/// Authorized calls (`get_orders`, `create_order`, `get_user`,
/// `update_user`, `logout`) read tokens from the implementation's own
/// session storage; callers never pass tokens around.
#[async_trait]
pub trait BurgerApi: Send + Sync {
    // =========================================================================
    // Catalog & Orders
    // =========================================================================

    /// Full ingredient catalog.
    async fn get_ingredients(&self) -> ApiResult<Vec<Ingredient>>;

    /// Public feed of recent orders with counters.
    async fn get_feed(&self) -> ApiResult<FeedSnapshot>;

    /// Orders of the logged-in user.
    async fn get_orders(&self) -> ApiResult<Vec<Order>>;

    /// Places an order for the given ingredient ids.
    async fn create_order(&self, ingredient_ids: &[String]) -> ApiResult<CreatedOrder>;

    /// Looks an order up by its public number. The list may be empty.
    async fn get_order_by_number(&self, number: u64) -> ApiResult<Vec<Order>>;

    // =========================================================================
    // Auth & Profile
    // =========================================================================

    async fn register(&self, data: &RegisterData) -> ApiResult<AuthSession>;

    async fn login(&self, data: &LoginData) -> ApiResult<AuthSession>;

    /// Invalidates the stored refresh token on the server.
    async fn logout(&self) -> ApiResult<()>;

    async fn get_user(&self) -> ApiResult<User>;

    async fn update_user(&self, update: &UserUpdate) -> ApiResult<User>;

    /// Asks the server to email a reset code.
    async fn forgot_password(&self, email: &str) -> ApiResult<()>;

    /// Sets a new password using the emailed code.
    async fn reset_password(&self, data: &ResetPasswordData) -> ApiResult<()>;
}
