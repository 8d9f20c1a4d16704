//! # Session Operations
//!
//! The user slice never sees tokens. These operations are where tokens are
//! written (register, login) and erased (logout, failed auth check).
//!
//! ## Auth Check on Mount
//! ```text
//! check_user_auth
//!   │
//!   ├── no stored session ─────────► nothing dispatched
//!   │
//!   └── fetchUser
//!         ├── fulfilled ─► user restored
//!         └── rejected ──► tokens erased
//! ```

use tracing::{error, info, warn};

use burger_api::{ApiError, BurgerApi, SessionStorage, Tokens};
use burger_core::{LoginData, RegisterData, ResetPasswordData, User, UserUpdate};

use crate::operations::run;
use crate::slices::user::UserAction;
use crate::store::Store;

pub async fn register_user(
    store: &Store,
    api: &dyn BurgerApi,
    session: &dyn SessionStorage,
    data: &RegisterData,
) -> Option<User> {
    run(store, |phase| UserAction::Register(phase).into(), async {
        let auth = api.register(data).await?;
        session.save(&Tokens::new(auth.access_token, auth.refresh_token))?;
        info!(email = %auth.user.email, "Registered");
        Ok::<_, ApiError>(auth.user)
    })
    .await
}

pub async fn login_user(
    store: &Store,
    api: &dyn BurgerApi,
    session: &dyn SessionStorage,
    data: &LoginData,
) -> Option<User> {
    run(store, |phase| UserAction::Login(phase).into(), async {
        let auth = api.login(data).await?;
        session.save(&Tokens::new(auth.access_token, auth.refresh_token))?;
        info!(email = %auth.user.email, "Logged in");
        Ok::<_, ApiError>(auth.user)
    })
    .await
}

/// Logs out on the server, then forgets the tokens.
pub async fn logout_user(
    store: &Store,
    api: &dyn BurgerApi,
    session: &dyn SessionStorage,
) -> Option<()> {
    run(store, |phase| UserAction::Logout(phase).into(), async {
        api.logout().await?;
        session.clear()?;
        info!("Logged out");
        Ok::<_, ApiError>(())
    })
    .await
}

pub async fn fetch_user(store: &Store, api: &dyn BurgerApi) -> Option<User> {
    run(
        store,
        |phase| UserAction::FetchUser(phase).into(),
        api.get_user(),
    )
    .await
}

pub async fn update_user(store: &Store, api: &dyn BurgerApi, update: &UserUpdate) -> Option<User> {
    run(
        store,
        |phase| UserAction::UpdateUser(phase).into(),
        api.update_user(update),
    )
    .await
}

/// Asks for a reset code. On success the reset-password screen unlocks.
pub async fn request_password_reset(store: &Store, api: &dyn BurgerApi, email: &str) -> Option<()> {
    run(
        store,
        |phase| UserAction::RequestPasswordReset(phase).into(),
        api.forgot_password(email),
    )
    .await
}

pub async fn reset_password(
    store: &Store,
    api: &dyn BurgerApi,
    data: &ResetPasswordData,
) -> Option<()> {
    run(
        store,
        |phase| UserAction::ResetPassword(phase).into(),
        api.reset_password(data),
    )
    .await
}

/// Restores the user from stored tokens, if there are any.
pub async fn check_user_auth(
    store: &Store,
    api: &dyn BurgerApi,
    session: &dyn SessionStorage,
) -> Option<User> {
    if !session.has_session() {
        return None;
    }

    let user = fetch_user(store, api).await;
    if user.is_none() {
        warn!("Stored session rejected, clearing tokens");
        if let Err(e) = session.clear() {
            error!(error = %e, "Failed to clear session");
        }
    }
    user
}
