//! Login, registration, profile and password recovery.

use anyhow::{bail, Result};

use burger_core::{LoginData, RegisterData, ResetPasswordData, UserUpdate};
use burger_store::{App, Location, Resolution};

use super::{state_error, Output};
use crate::cli::{LoginArgs, RegisterArgs};
use crate::render;

pub(super) async fn login(app: &App, args: LoginArgs, out: Output) -> Result<()> {
    let form = LoginData {
        email: args.email,
        password: args.password,
    };
    match app.login(&form).await? {
        Some(user) => out.emit(&user, || render::user(&user)),
        None => Err(state_error(app, |s| s.user.error.clone(), "Login failed")),
    }
}

pub(super) async fn register(app: &App, args: RegisterArgs, out: Output) -> Result<()> {
    let form = RegisterData {
        email: args.email,
        name: args.name,
        password: args.password,
    };
    match app.register(&form).await? {
        Some(user) => out.emit(&user, || render::user(&user)),
        None => Err(state_error(app, |s| s.user.error.clone(), "Registration failed")),
    }
}

pub(super) async fn logout(app: &App) -> Result<()> {
    if !app.session().has_session() {
        println!("Not logged in");
        return Ok(());
    }
    match app.logout().await {
        Some(()) => {
            println!("Logged out");
            Ok(())
        }
        None => Err(state_error(app, |s| s.user.error.clone(), "Logout failed")),
    }
}

pub(super) async fn profile(app: &App, out: Output) -> Result<()> {
    if let Resolution::Redirect { .. } = app.navigate(&Location::new("/profile")).await {
        bail!("Not logged in");
    }
    match app.store().select(|s| s.user.user.clone()) {
        Some(user) => out.emit(&user, || render::user(&user)),
        None => bail!("Not logged in"),
    }
}

pub(super) async fn update(
    app: &App,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    out: Output,
) -> Result<()> {
    if !app.store().select(|s| s.user.is_authenticated()) {
        bail!("Not logged in");
    }
    let update = UserUpdate { name, email, password };
    match app.update_profile(&update).await? {
        Some(user) => out.emit(&user, || render::user(&user)),
        None => Err(state_error(app, |s| s.user.error.clone(), "Profile update failed")),
    }
}

pub(super) async fn forgot_password(app: &App, email: &str) -> Result<()> {
    match app.forgot_password(email).await? {
        Some(()) => {
            println!("Reset code sent to {}", email.trim());
            Ok(())
        }
        None => Err(state_error(app, |s| s.user.error.clone(), "Password reset failed")),
    }
}

/// Each CLI run starts from a fresh store, so the "code requested" flag
/// from `forgot-password` is not carried over; the server checks the code.
pub(super) async fn reset_password(app: &App, password: String, token: String) -> Result<()> {
    let form = ResetPasswordData { password, token };
    match app.reset_password(&form).await? {
        Some(()) => {
            println!("Password changed");
            Ok(())
        }
        None => Err(state_error(app, |s| s.user.error.clone(), "Password reset failed")),
    }
}
