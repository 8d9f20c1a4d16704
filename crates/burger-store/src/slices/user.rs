//! # User Slice
//!
//! The logged-in profile and the password-reset flag. Tokens are not
//! state; the session operations keep them in
//! [`burger_api::SessionStorage`].
//!
//! ## Operations
//! ```text
//! ┌──────────────────────┬──────────────────────────────┬─────────────────────────────────┐
//! │ action               │ on fulfilled                 │ default error                   │
//! ├──────────────────────┼──────────────────────────────┼─────────────────────────────────┤
//! │ registerUser         │ user = payload               │ Failed to register              │
//! │ loginUser            │ user = payload               │ Failed to login                 │
//! │ logoutUser           │ user = None                  │ Failed to logout                │
//! │ fetchUser            │ user = payload               │ Failed to fetch user            │
//! │ updateUser           │ user = payload               │ Failed to update user           │
//! │ requestPasswordReset │ passwordResetRequested=true  │ Failed to request password reset│
//! │ resetPassword        │ passwordResetRequested=false │ Failed to reset password        │
//! │ clearPasswordReset   │ passwordResetRequested=false │ (sync)                          │
//! └──────────────────────┴──────────────────────────────┴─────────────────────────────────┘
//! ```

use serde::Serialize;

use burger_core::User;

use crate::action::AsyncPhase;

pub const REGISTER_ERROR: &str = "Failed to register";
pub const LOGIN_ERROR: &str = "Failed to login";
pub const LOGOUT_ERROR: &str = "Failed to logout";
pub const FETCH_USER_ERROR: &str = "Failed to fetch user";
pub const UPDATE_USER_ERROR: &str = "Failed to update user";
pub const REQUEST_PASSWORD_RESET_ERROR: &str = "Failed to request password reset";
pub const RESET_PASSWORD_ERROR: &str = "Failed to reset password";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub password_reset_requested: bool,
}

impl UserState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Register(AsyncPhase<User>),
    Login(AsyncPhase<User>),
    Logout(AsyncPhase<()>),
    FetchUser(AsyncPhase<User>),
    UpdateUser(AsyncPhase<User>),
    RequestPasswordReset(AsyncPhase<()>),
    ResetPassword(AsyncPhase<()>),
    ClearPasswordReset,
}

impl UserAction {
    pub fn name(&self) -> String {
        let (base, phase) = match self {
            UserAction::Register(p) => ("registerUser", p.name()),
            UserAction::Login(p) => ("loginUser", p.name()),
            UserAction::Logout(p) => ("logoutUser", p.name()),
            UserAction::FetchUser(p) => ("fetchUser", p.name()),
            UserAction::UpdateUser(p) => ("updateUser", p.name()),
            UserAction::RequestPasswordReset(p) => ("requestPasswordReset", p.name()),
            UserAction::ResetPassword(p) => ("resetPassword", p.name()),
            UserAction::ClearPasswordReset => return "clearPasswordReset".to_string(),
        };
        format!("{}/{}", base, phase)
    }
}

pub fn reduce(state: &mut UserState, action: UserAction) {
    let UserState {
        user,
        loading,
        error,
        password_reset_requested,
    } = state;

    match action {
        UserAction::Register(phase) => {
            if let Some(payload) = phase.track(loading, error, REGISTER_ERROR) {
                *user = Some(payload);
            }
        }
        UserAction::Login(phase) => {
            if let Some(payload) = phase.track(loading, error, LOGIN_ERROR) {
                *user = Some(payload);
            }
        }
        UserAction::Logout(phase) => {
            if phase.track(loading, error, LOGOUT_ERROR).is_some() {
                *user = None;
            }
        }
        UserAction::FetchUser(phase) => {
            if let Some(payload) = phase.track(loading, error, FETCH_USER_ERROR) {
                *user = Some(payload);
            }
        }
        UserAction::UpdateUser(phase) => {
            if let Some(payload) = phase.track(loading, error, UPDATE_USER_ERROR) {
                *user = Some(payload);
            }
        }
        UserAction::RequestPasswordReset(phase) => {
            if phase.track(loading, error, REQUEST_PASSWORD_RESET_ERROR).is_some() {
                *password_reset_requested = true;
            }
        }
        UserAction::ResetPassword(phase) => {
            if phase.track(loading, error, RESET_PASSWORD_ERROR).is_some() {
                *password_reset_requested = false;
            }
        }
        UserAction::ClearPasswordReset => *password_reset_requested = false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            email: "test@example.com".into(),
            name: "Test".into(),
        }
    }

    /// Builds each request action in the given phase, paired with its
    /// default error.
    fn requests(make_user: fn() -> AsyncPhase<User>, make_unit: fn() -> AsyncPhase<()>) -> Vec<(UserAction, &'static str)> {
        vec![
            (UserAction::Register(make_user()), REGISTER_ERROR),
            (UserAction::Login(make_user()), LOGIN_ERROR),
            (UserAction::Logout(make_unit()), LOGOUT_ERROR),
            (UserAction::FetchUser(make_user()), FETCH_USER_ERROR),
            (UserAction::UpdateUser(make_user()), UPDATE_USER_ERROR),
            (UserAction::RequestPasswordReset(make_unit()), REQUEST_PASSWORD_RESET_ERROR),
            (UserAction::ResetPassword(make_unit()), RESET_PASSWORD_ERROR),
        ]
    }

    #[test]
    fn test_every_pending_sets_loading_and_clears_error() {
        for (action, _) in requests(|| AsyncPhase::Pending, || AsyncPhase::Pending) {
            let mut state = UserState {
                error: Some("old".into()),
                ..Default::default()
            };
            reduce(&mut state, action);
            assert!(state.loading);
            assert!(state.error.is_none());
        }
    }

    #[test]
    fn test_every_rejection_without_message_uses_default() {
        for (action, expected) in requests(|| AsyncPhase::Rejected(None), || AsyncPhase::Rejected(None)) {
            let mut state = UserState {
                loading: true,
                ..Default::default()
            };
            reduce(&mut state, action);
            assert!(!state.loading);
            assert_eq!(state.error.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_every_rejection_with_message_keeps_it() {
        for (action, _) in requests(
            || AsyncPhase::rejected("Server said no"),
            || AsyncPhase::rejected("Server said no"),
        ) {
            let mut state = UserState::default();
            reduce(&mut state, action);
            assert_eq!(state.error.as_deref(), Some("Server said no"));
        }
    }

    #[test]
    fn test_login_fetch_update_set_user() {
        for action in [
            UserAction::Register(AsyncPhase::Fulfilled(user())),
            UserAction::Login(AsyncPhase::Fulfilled(user())),
            UserAction::FetchUser(AsyncPhase::Fulfilled(user())),
            UserAction::UpdateUser(AsyncPhase::Fulfilled(user())),
        ] {
            let mut state = UserState {
                loading: true,
                ..Default::default()
            };
            reduce(&mut state, action);
            assert_eq!(state.user, Some(user()));
            assert!(!state.loading);
            assert!(state.is_authenticated());
        }
    }

    #[test]
    fn test_logout_clears_user() {
        let mut state = UserState {
            user: Some(user()),
            ..Default::default()
        };
        reduce(&mut state, UserAction::Logout(AsyncPhase::Fulfilled(())));
        assert!(state.user.is_none());
    }

    #[test]
    fn test_failed_logout_keeps_user() {
        let mut state = UserState {
            user: Some(user()),
            ..Default::default()
        };
        reduce(&mut state, UserAction::Logout(AsyncPhase::Rejected(None)));
        assert_eq!(state.user, Some(user()));
    }

    #[test]
    fn test_password_reset_flag() {
        let mut state = UserState::default();
        reduce(&mut state, UserAction::RequestPasswordReset(AsyncPhase::Fulfilled(())));
        assert!(state.password_reset_requested);

        reduce(&mut state, UserAction::ResetPassword(AsyncPhase::Fulfilled(())));
        assert!(!state.password_reset_requested);

        reduce(&mut state, UserAction::RequestPasswordReset(AsyncPhase::Fulfilled(())));
        reduce(&mut state, UserAction::ResetPassword(AsyncPhase::Rejected(None)));
        assert!(state.password_reset_requested);
    }

    #[test]
    fn test_clear_password_reset_twice() {
        let mut state = UserState {
            password_reset_requested: true,
            ..Default::default()
        };
        reduce(&mut state, UserAction::ClearPasswordReset);
        assert!(!state.password_reset_requested);
        reduce(&mut state, UserAction::ClearPasswordReset);
        assert!(!state.password_reset_requested);
    }
}
