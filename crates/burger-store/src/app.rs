//! # App Context
//!
//! Bundles the store, the API client and the token storage, and offers
//! the operations views call. There is no global store: whoever needs
//! state gets an `App` (or its [`Store`]) handed to them.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         App Lifecycle                                   │
//! │                                                                         │
//! │  App::from_config ──► FileSessionStorage + HttpBurgerApi + Store        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  mount() ──┬── fetch_ingredients ──┐   (concurrently)                   │
//! │            └── check_user_auth ────┘                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  navigate(location) ──► resolve gate ──► load data for the screen       │
//! │                                                                         │
//! │  /feed                  fetch_feed                                      │
//! │  /profile/orders        fetch_orders                                    │
//! │  /feed/:n, /profile/orders/:n                                          │
//! │                         fetch_order_by_number unless already known      │
//! │  /, /ingredients/:id    fetch_ingredients if the catalog is empty       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use burger_api::{BurgerApi, FileSessionStorage, HttpBurgerApi, SessionStorage};
use burger_core::validation::{
    validate_email, validate_login, validate_registration, validate_reset_password,
    validate_user_update,
};
use burger_core::{
    CoreError, LoginData, RegisterData, ResetPasswordData, User, UserUpdate, ValidationError,
};

use crate::config::AppConfig;
use crate::error::StoreResult;
use crate::operations::{self, PlaceOrderOutcome};
use crate::routes::{resolve, Location, Resolution, Route};
use crate::selectors::select_order_by_number;
use crate::slices::constructor::ConstructorAction;
use crate::store::Store;

/// Everything a view needs.
#[derive(Clone)]
pub struct App {
    store: Store,
    api: Arc<dyn BurgerApi>,
    session: Arc<dyn SessionStorage>,
    checking_session: Arc<AtomicBool>,
}

impl App {
    pub fn new(api: Arc<dyn BurgerApi>, session: Arc<dyn SessionStorage>) -> Self {
        Self {
            store: Store::new(),
            api,
            session,
            checking_session: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Wires the REST client and the on-disk session from configuration.
    pub fn from_config(config: &AppConfig) -> StoreResult<Self> {
        let data_dir = config.resolve_data_dir()?;
        let session = Arc::new(FileSessionStorage::open(&data_dir)?);
        let api = HttpBurgerApi::new(&config.api_url, config.request_timeout(), session.clone())?;

        info!(api_url = %config.api_url, data_dir = %data_dir.display(), "App configured");
        Ok(Self::new(Arc::new(api), session))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn api(&self) -> &dyn BurgerApi {
        self.api.as_ref()
    }

    pub fn session(&self) -> &dyn SessionStorage {
        self.session.as_ref()
    }

    /// True while [`App::mount`] is restoring the stored session.
    pub fn is_checking_session(&self) -> bool {
        self.checking_session.load(Ordering::SeqCst)
    }

    // =========================================================================
    // Lifecycle & Navigation
    // =========================================================================

    /// Loads the catalog and restores the session, concurrently.
    pub async fn mount(&self) {
        debug!("Mounting app");
        let restore = async {
            self.checking_session.store(true, Ordering::SeqCst);
            operations::check_user_auth(&self.store, self.api(), self.session()).await;
            self.checking_session.store(false, Ordering::SeqCst);
        };
        tokio::join!(operations::fetch_ingredients(&self.store, self.api()), restore);
    }

    /// Resolves `location` and loads what the resulting screen shows.
    pub async fn navigate(&self, location: &Location) -> Resolution {
        let checking = self.is_checking_session();
        let resolution = self
            .store
            .select(|state| resolve(location, &state.user, checking));
        debug!(path = %location.path, ?resolution, "navigate");

        if let Resolution::Render(screen) = &resolution {
            self.load_route_data(&screen.route).await;
        }
        resolution
    }

    async fn load_route_data(&self, route: &Route) {
        match route {
            Route::Constructor | Route::Ingredient { .. } => self.ensure_ingredients().await,
            Route::Feed => {
                operations::fetch_feed(&self.store, self.api()).await;
            }
            Route::ProfileOrders => {
                operations::fetch_orders(&self.store, self.api()).await;
            }
            Route::FeedOrder { number } | Route::ProfileOrder { number } => {
                self.ensure_ingredients().await;
                let known = self
                    .store
                    .select(|state| select_order_by_number(state, *number).is_some());
                if !known {
                    operations::fetch_order_by_number(&self.store, self.api(), *number).await;
                }
            }
            _ => {}
        }
    }

    async fn ensure_ingredients(&self) {
        let needed = self
            .store
            .select(|state| state.ingredients.items.is_empty() && !state.ingredients.loading);
        if needed {
            operations::fetch_ingredients(&self.store, self.api()).await;
        }
    }

    // =========================================================================
    // Constructor & Orders
    // =========================================================================

    /// Adds a catalog ingredient to the burger (buns replace the bun).
    pub fn add_ingredient(&self, id: &str) -> StoreResult<()> {
        let ingredient = self
            .store
            .select(|state| state.ingredients.find(id).cloned())
            .ok_or_else(|| CoreError::IngredientNotFound(id.to_string()))?;

        self.store.dispatch(ConstructorAction::add(ingredient));
        Ok(())
    }

    pub fn remove_ingredient(&self, instance_id: &str) {
        self.store
            .dispatch(ConstructorAction::RemoveIngredient(instance_id.to_string()));
    }

    pub fn move_ingredient(&self, from: usize, to: usize) {
        self.store
            .dispatch(ConstructorAction::MoveIngredient { from, to });
    }

    pub async fn place_order(&self) -> PlaceOrderOutcome {
        operations::place_order(&self.store, self.api()).await
    }

    pub fn close_order_modal(&self) {
        operations::close_order_modal(&self.store);
    }

    // =========================================================================
    // Session (forms are validated before anything is sent)
    // =========================================================================

    pub async fn login(&self, form: &LoginData) -> StoreResult<Option<User>> {
        validate_login(form)?;
        let form = LoginData {
            email: form.email.trim().to_string(),
            ..form.clone()
        };
        Ok(operations::login_user(&self.store, self.api(), self.session(), &form).await)
    }

    pub async fn register(&self, form: &RegisterData) -> StoreResult<Option<User>> {
        validate_registration(form)?;
        let form = RegisterData {
            email: form.email.trim().to_string(),
            name: form.name.trim().to_string(),
            ..form.clone()
        };
        Ok(operations::register_user(&self.store, self.api(), self.session(), &form).await)
    }

    pub async fn logout(&self) -> Option<()> {
        operations::logout_user(&self.store, self.api(), self.session()).await
    }

    pub async fn update_profile(&self, update: &UserUpdate) -> StoreResult<Option<User>> {
        if update.is_empty() {
            return Err(ValidationError::Required {
                field: "name, email or password".to_string(),
            }
            .into());
        }
        validate_user_update(update)?;
        let update = UserUpdate {
            name: update.name.as_deref().map(|n| n.trim().to_string()),
            email: update.email.as_deref().map(|e| e.trim().to_string()),
            password: update.password.clone(),
        };
        Ok(operations::update_user(&self.store, self.api(), &update).await)
    }

    pub async fn forgot_password(&self, email: &str) -> StoreResult<Option<()>> {
        validate_email(email)?;
        Ok(operations::request_password_reset(&self.store, self.api(), email.trim()).await)
    }

    pub async fn reset_password(&self, form: &ResetPasswordData) -> StoreResult<Option<()>> {
        validate_reset_password(form)?;
        Ok(operations::reset_password(&self.store, self.api(), form).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::AsyncPhase;
    use crate::error::StoreError;
    use crate::operations::fake::{order, FakeApi};
    use crate::slices::user::UserAction;
    use crate::routes::Screen;
    use burger_api::{MemorySessionStorage, Tokens};

    fn app(api: FakeApi) -> (App, Arc<FakeApi>) {
        let api = Arc::new(api);
        let app = App::new(api.clone(), Arc::new(MemorySessionStorage::new()));
        (app, api)
    }

    #[tokio::test]
    async fn test_mount_loads_catalog_without_session() {
        let (app, api) = app(FakeApi::default());
        app.mount().await;

        let state = app.store().snapshot();
        assert_eq!(state.ingredients.items.len(), 3);
        assert!(state.user.user.is_none());
        assert_eq!(api.calls(), vec!["get_ingredients"]);
    }

    #[tokio::test]
    async fn test_mount_restores_user_from_session() {
        let api = Arc::new(FakeApi::default());
        let session = Arc::new(MemorySessionStorage::new());
        session.save(&Tokens::new("Bearer a", "r")).unwrap();
        let app = App::new(api.clone(), session);

        app.mount().await;
        assert!(app.store().snapshot().user.is_authenticated());
        assert!(api.calls().contains(&"get_user".to_string()));
    }

    #[tokio::test]
    async fn test_navigate_feed_fetches_feed() {
        let (app, api) = app(FakeApi::default());
        let resolution = app.navigate(&Location::new("/feed")).await;

        assert!(matches!(resolution, Resolution::Render(Screen { route: Route::Feed, .. })));
        assert_eq!(app.store().snapshot().feed.total, 100);
        assert_eq!(api.calls(), vec!["get_feed"]);
    }

    #[tokio::test]
    async fn test_navigate_order_from_feed_uses_known_order() {
        let (app, api) = app(FakeApi::default());
        app.navigate(&Location::new("/feed")).await;

        let location = Location::new("/feed/2").with_background("/feed");
        app.navigate(&location).await;
        assert!(!api.calls().contains(&"get_order_by_number".to_string()));
    }

    #[tokio::test]
    async fn test_navigate_order_deep_link_fetches_order() {
        let (app, api) = app(FakeApi::default());
        app.navigate(&Location::new("/feed/31")).await;

        assert!(api.calls().contains(&"get_order_by_number".to_string()));
        assert_eq!(
            app.store().select(|s| s.orders.current_order.as_ref().map(|o| o.number)),
            Some(31)
        );
    }

    #[tokio::test]
    async fn test_navigate_profile_orders_requires_login() {
        let (app, api) = app(FakeApi::default());
        let resolution = app.navigate(&Location::new("/profile/orders")).await;

        assert_eq!(
            resolution,
            Resolution::Redirect {
                to: Route::Login,
                from: Some(Route::ProfileOrders)
            }
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_then_profile_orders_loads_history() {
        let (app, _api) = app(FakeApi::default());
        let form = LoginData {
            email: "test@example.com".into(),
            password: "secret".into(),
        };
        app.login(&form).await.unwrap();
        assert!(app.session().has_session());

        app.navigate(&Location::new("/profile/orders")).await;
        assert_eq!(app.store().snapshot().orders.orders, vec![order(5)]);
    }

    #[tokio::test]
    async fn test_invalid_login_form_sends_nothing() {
        let (app, api) = app(FakeApi::default());
        let form = LoginData {
            email: "not-an-email".into(),
            password: "secret".into(),
        };

        let result = app.login(&form).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(api.calls().is_empty());
        assert!(!app.store().snapshot().user.loading);
    }

    #[tokio::test]
    async fn test_login_and_register_send_trimmed_email() {
        let (app, api) = app(FakeApi::default());

        let login = LoginData {
            email: "  test@example.com ".into(),
            password: "secret".into(),
        };
        app.login(&login).await.unwrap();
        assert_eq!(api.sent_email().as_deref(), Some("test@example.com"));

        let register = RegisterData {
            email: " new@example.com".into(),
            name: " New ".into(),
            password: "secret".into(),
        };
        app.register(&register).await.unwrap();
        assert_eq!(api.sent_email().as_deref(), Some("new@example.com"));
    }

    #[tokio::test]
    async fn test_gates_wait_only_for_session_check() {
        let (app, _api) = app(FakeApi::default());

        app.checking_session.store(true, Ordering::SeqCst);
        let checking = app.navigate(&Location::new("/profile")).await;
        assert_eq!(checking, Resolution::Checking);
        app.checking_session.store(false, Ordering::SeqCst);

        app.store().dispatch(UserAction::Login(AsyncPhase::Pending));
        let login = app.navigate(&Location::new("/login")).await;
        assert!(matches!(login, Resolution::Render(Screen { route: Route::Login, .. })));
    }

    #[tokio::test]
    async fn test_mount_finishes_session_check() {
        let api = Arc::new(FakeApi::default());
        let session = Arc::new(MemorySessionStorage::new());
        session.save(&Tokens::new("Bearer a", "r")).unwrap();
        let app = App::new(api, session);

        assert!(!app.is_checking_session());
        app.mount().await;
        assert!(!app.is_checking_session());
        let profile = app.navigate(&Location::new("/profile")).await;
        assert!(matches!(profile, Resolution::Render(Screen { route: Route::Profile, .. })));
    }

    #[tokio::test]
    async fn test_empty_profile_update_is_rejected() {
        let (app, api) = app(FakeApi::default());
        assert!(app.update_profile(&UserUpdate::default()).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_ingredient_by_catalog_id() {
        let (app, _api) = app(FakeApi::default());
        app.mount().await;

        app.add_ingredient("bun").unwrap();
        app.add_ingredient("main").unwrap();
        app.add_ingredient("main").unwrap();
        assert!(matches!(
            app.add_ingredient("ghost"),
            Err(StoreError::Core(CoreError::IngredientNotFound(_)))
        ));

        let burger = app.store().snapshot().constructor_burger;
        assert_eq!(burger.bun.as_ref().map(|b| b.id.as_str()), Some("bun"));
        assert_eq!(burger.ingredients.len(), 2);

        let first = burger.ingredients[0].id.clone();
        app.move_ingredient(0, 1);
        assert_eq!(app.store().snapshot().constructor_burger.ingredients[1].id, first);
        app.remove_ingredient(&first);
        assert_eq!(app.store().snapshot().constructor_burger.ingredients.len(), 1);
    }

    #[tokio::test]
    async fn test_forgot_then_reset_password() {
        let (app, _api) = app(FakeApi::default());

        let before = app.navigate(&Location::new("/reset-password")).await;
        assert!(matches!(before, Resolution::Redirect { to: Route::ForgotPassword, .. }));

        app.forgot_password("test@example.com").await.unwrap();
        let after = app.navigate(&Location::new("/reset-password")).await;
        assert!(matches!(after, Resolution::Render(_)));

        let form = ResetPasswordData {
            password: "newsecret".into(),
            token: "code".into(),
        };
        app.reset_password(&form).await.unwrap();
        assert!(!app.store().snapshot().user.password_reset_requested);
    }
}
