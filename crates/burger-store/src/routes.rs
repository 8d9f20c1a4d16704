//! # Routes & Access Gates
//!
//! Maps URL paths to screens and decides whether the current user may see
//! them.
//!
//! ## Route Table
//! ```text
//! ┌──────────────────────────┬──────────────────────┬────────────────────┐
//! │ path                     │ gate                 │ modal over         │
//! ├──────────────────────────┼──────────────────────┼────────────────────┤
//! │ /                        │ public               │                    │
//! │ /feed                    │ public               │                    │
//! │ /feed/:number            │ public               │ /feed              │
//! │ /ingredients/:id         │ public               │ /                  │
//! │ /login                   │ only unauthenticated │                    │
//! │ /register                │ only unauthenticated │                    │
//! │ /forgot-password         │ only unauthenticated │                    │
//! │ /reset-password          │ only unauthenticated │                    │
//! │ /profile                 │ only authenticated   │                    │
//! │ /profile/orders          │ only authenticated   │                    │
//! │ /profile/orders/:number  │ only authenticated   │ /profile/orders    │
//! │ *                        │ public (not found)   │                    │
//! └──────────────────────────┴──────────────────────┴────────────────────┘
//! ```
//!
//! ## Gate Decisions
//! ```text
//! user request in flight ──────────────────────────► Checking
//! OnlyAuthenticated,   no user ────────────────────► Redirect /login (from = route)
//! OnlyUnauthenticated, user ───────────────────────► Redirect (from or /)
//! /reset-password without a requested reset ───────► Redirect /forgot-password
//! otherwise ───────────────────────────────────────► Render
//! ```
//!
//! A modal route opened from its list keeps the list rendered behind it.
//! Opened directly (deep link, reload) it renders as a full page.

use std::fmt;

use serde::Serialize;

use crate::slices::user::UserState;

// =============================================================================
// Route
// =============================================================================

/// A parsed location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    Constructor,
    Feed,
    FeedOrder { number: u64 },
    Ingredient { id: String },
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Profile,
    ProfileOrders,
    ProfileOrder { number: u64 },
    NotFound { path: String },
}

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Gate {
    Public,
    OnlyAuthenticated,
    OnlyUnauthenticated,
}

impl Route {
    /// Parses a path. Query string, fragment and trailing slashes are
    /// ignored; anything unknown is [`Route::NotFound`].
    pub fn parse(path: &str) -> Route {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Constructor,
            ["feed"] => Route::Feed,
            ["feed", number] => match number.parse() {
                Ok(number) => Route::FeedOrder { number },
                Err(_) => Route::not_found(path),
            },
            ["ingredients", id] => Route::Ingredient { id: id.to_string() },
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["reset-password"] => Route::ResetPassword,
            ["profile"] => Route::Profile,
            ["profile", "orders"] => Route::ProfileOrders,
            ["profile", "orders", number] => match number.parse() {
                Ok(number) => Route::ProfileOrder { number },
                Err(_) => Route::not_found(path),
            },
            _ => Route::not_found(path),
        }
    }

    fn not_found(path: &str) -> Route {
        Route::NotFound {
            path: path.to_string(),
        }
    }

    /// The canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Constructor => "/".to_string(),
            Route::Feed => "/feed".to_string(),
            Route::FeedOrder { number } => format!("/feed/{}", number),
            Route::Ingredient { id } => format!("/ingredients/{}", id),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword => "/reset-password".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::ProfileOrders => "/profile/orders".to_string(),
            Route::ProfileOrder { number } => format!("/profile/orders/{}", number),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn gate(&self) -> Gate {
        match self {
            Route::Login | Route::Register | Route::ForgotPassword | Route::ResetPassword => {
                Gate::OnlyUnauthenticated
            }
            Route::Profile | Route::ProfileOrders | Route::ProfileOrder { .. } => {
                Gate::OnlyAuthenticated
            }
            _ => Gate::Public,
        }
    }

    /// The list a modal route is opened from, if it is a modal route.
    pub fn modal_parent(&self) -> Option<Route> {
        match self {
            Route::FeedOrder { .. } => Some(Route::Feed),
            Route::Ingredient { .. } => Some(Route::Constructor),
            Route::ProfileOrder { .. } => Some(Route::ProfileOrders),
            _ => None,
        }
    }

    pub fn is_modal(&self) -> bool {
        self.modal_parent().is_some()
    }

    /// Modal heading.
    pub fn modal_title(&self) -> Option<&'static str> {
        match self {
            Route::FeedOrder { .. } | Route::ProfileOrder { .. } => Some("Order details"),
            Route::Ingredient { .. } => Some("Ingredient details"),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Where the user wants to go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    /// Path of the list the link was clicked in, for modal routes.
    pub background: Option<String>,
    /// Route the user was redirected away from, to return to after login.
    pub from: Option<Route>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_from(mut self, from: Route) -> Self {
        self.from = Some(from);
        self
    }
}

/// What to put on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub route: Route,
    /// The list rendered behind a modal, when opened from that list.
    pub background: Option<Route>,
}

impl Screen {
    pub fn is_modal(&self) -> bool {
        self.background.is_some()
    }
}

/// Outcome of resolving a location against the current user state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Resolution {
    Render(Screen),
    /// The stored session is still being checked; show a preloader.
    Checking,
    Redirect { to: Route, from: Option<Route> },
}

/// Decides what `location` shows for the given user state.
///
/// `checking_session` is true only while the stored session is being
/// restored; other user requests in flight do not hold gated routes back.
pub fn resolve(location: &Location, user: &UserState, checking_session: bool) -> Resolution {
    let route = Route::parse(&location.path);

    match route.gate() {
        Gate::Public => {}
        _ if checking_session => return Resolution::Checking,
        Gate::OnlyAuthenticated if !user.is_authenticated() => {
            return Resolution::Redirect {
                to: Route::Login,
                from: Some(route),
            };
        }
        Gate::OnlyUnauthenticated if user.is_authenticated() => {
            return Resolution::Redirect {
                to: location.from.clone().unwrap_or(Route::Constructor),
                from: None,
            };
        }
        _ => {}
    }

    if route == Route::ResetPassword && !user.password_reset_requested {
        return Resolution::Redirect {
            to: Route::ForgotPassword,
            from: None,
        };
    }

    let background = location
        .background
        .as_deref()
        .map(Route::parse)
        .filter(|bg| route.modal_parent().as_ref() == Some(bg));

    Resolution::Render(Screen { route, background })
}

#[cfg(test)]
mod tests {
    use super::*;
    use burger_core::User;

    fn guest() -> UserState {
        UserState::default()
    }

    fn member() -> UserState {
        UserState {
            user: Some(User {
                email: "a@b.com".into(),
                name: "A".into(),
            }),
            ..Default::default()
        }
    }

    fn render(route: Route) -> Resolution {
        Resolution::Render(Screen {
            route,
            background: None,
        })
    }

    #[test]
    fn test_parse_route_table() {
        assert_eq!(Route::parse("/"), Route::Constructor);
        assert_eq!(Route::parse(""), Route::Constructor);
        assert_eq!(Route::parse("/feed/"), Route::Feed);
        assert_eq!(Route::parse("/feed/123"), Route::FeedOrder { number: 123 });
        assert_eq!(
            Route::parse("/ingredients/643d69a5c3f7b9001cfa093c"),
            Route::Ingredient {
                id: "643d69a5c3f7b9001cfa093c".into()
            }
        );
        assert_eq!(Route::parse("/login?next=1"), Route::Login);
        assert_eq!(Route::parse("/profile/orders"), Route::ProfileOrders);
        assert_eq!(
            Route::parse("/profile/orders/9"),
            Route::ProfileOrder { number: 9 }
        );
        assert!(matches!(Route::parse("/feed/abc"), Route::NotFound { .. }));
        assert!(matches!(Route::parse("/nowhere"), Route::NotFound { .. }));
    }

    #[test]
    fn test_path_round_trips_for_known_routes() {
        for path in ["/", "/feed", "/feed/5", "/ingredients/x", "/profile/orders/7", "/reset-password"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_gates() {
        assert_eq!(Route::Profile.gate(), Gate::OnlyAuthenticated);
        assert_eq!(Route::ProfileOrder { number: 1 }.gate(), Gate::OnlyAuthenticated);
        assert_eq!(Route::Login.gate(), Gate::OnlyUnauthenticated);
        assert_eq!(Route::ResetPassword.gate(), Gate::OnlyUnauthenticated);
        assert_eq!(Route::FeedOrder { number: 1 }.gate(), Gate::Public);
    }

    #[test]
    fn test_guest_is_sent_to_login_remembering_route() {
        let resolution = resolve(&Location::new("/profile/orders"), &guest(), false);
        assert_eq!(
            resolution,
            Resolution::Redirect {
                to: Route::Login,
                from: Some(Route::ProfileOrders),
            }
        );
    }

    #[test]
    fn test_member_is_sent_back_from_login() {
        assert_eq!(
            resolve(&Location::new("/login"), &member(), false),
            Resolution::Redirect {
                to: Route::Constructor,
                from: None
            }
        );

        let location = Location::new("/login").with_from(Route::Profile);
        assert_eq!(
            resolve(&location, &member(), false),
            Resolution::Redirect {
                to: Route::Profile,
                from: None
            }
        );
    }

    #[test]
    fn test_gated_routes_wait_for_session_check() {
        let user = guest();
        assert_eq!(resolve(&Location::new("/profile"), &user, true), Resolution::Checking);
        assert_eq!(resolve(&Location::new("/login"), &user, true), Resolution::Checking);
        assert_eq!(resolve(&Location::new("/feed"), &user, true), render(Route::Feed));
    }

    #[test]
    fn test_other_user_requests_do_not_block_gates() {
        let logging_in = UserState {
            loading: true,
            ..Default::default()
        };
        assert_eq!(
            resolve(&Location::new("/login"), &logging_in, false),
            render(Route::Login)
        );

        let updating = UserState {
            loading: true,
            ..member()
        };
        assert_eq!(
            resolve(&Location::new("/profile"), &updating, false),
            render(Route::Profile)
        );
    }

    #[test]
    fn test_reset_password_needs_requested_reset() {
        assert_eq!(
            resolve(&Location::new("/reset-password"), &guest(), false),
            Resolution::Redirect {
                to: Route::ForgotPassword,
                from: None
            }
        );

        let requested = UserState {
            password_reset_requested: true,
            ..Default::default()
        };
        assert_eq!(
            resolve(&Location::new("/reset-password"), &requested, false),
            render(Route::ResetPassword)
        );
    }

    #[test]
    fn test_modal_keeps_background_only_when_opened_from_its_list() {
        let from_feed = Location::new("/feed/12").with_background("/feed");
        assert_eq!(
            resolve(&from_feed, &guest(), false),
            Resolution::Render(Screen {
                route: Route::FeedOrder { number: 12 },
                background: Some(Route::Feed),
            })
        );

        let deep_link = Location::new("/feed/12");
        assert_eq!(
            resolve(&deep_link, &guest(), false),
            render(Route::FeedOrder { number: 12 })
        );

        let wrong_list = Location::new("/feed/12").with_background("/profile/orders");
        assert_eq!(
            resolve(&wrong_list, &guest(), false),
            render(Route::FeedOrder { number: 12 })
        );
    }

    #[test]
    fn test_modal_titles() {
        assert_eq!(Route::Ingredient { id: "x".into() }.modal_title(), Some("Ingredient details"));
        assert_eq!(Route::FeedOrder { number: 1 }.modal_title(), Some("Order details"));
        assert!(Route::Feed.modal_title().is_none());
        assert!(!Route::Feed.is_modal());
    }
}
