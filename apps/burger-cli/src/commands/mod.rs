//! Command dispatch and output helpers.

mod account;
mod catalog;
mod orders;

use anyhow::{anyhow, Result};
use serde::Serialize;

use burger_store::{App, AppConfig, RootState};

use crate::cli::{Command, OrderCommand, ProfileCommand};

/// Executes one parsed command against a mounted app.
pub async fn execute(app: &App, config: &AppConfig, command: Command, json: bool) -> Result<()> {
    let out = Output { json };

    match command {
        Command::Ingredients => catalog::ingredients(app, out),
        Command::Feed => catalog::feed(app, config, out).await,
        Command::Route { path, background } => catalog::route(app, path, background, out).await,

        Command::Order { command } => match command {
            OrderCommand::Show { number } => orders::show(app, number, out).await,
            OrderCommand::Place { bun, fillings } => orders::place(app, &bun, &fillings, out).await,
        },
        Command::Orders => orders::history(app, out).await,

        Command::Login(args) => account::login(app, args, out).await,
        Command::Register(args) => account::register(app, args, out).await,
        Command::Logout => account::logout(app).await,
        Command::Profile { command: None } => account::profile(app, out).await,
        Command::Profile {
            command: Some(ProfileCommand::Update { name, email, password }),
        } => account::update(app, name, email, password, out).await,
        Command::ForgotPassword { email } => account::forgot_password(app, &email).await,
        Command::ResetPassword { password, token } => {
            account::reset_password(app, password, token).await
        }
    }
}

/// Text or JSON, chosen once per invocation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Output {
    json: bool,
}

impl Output {
    pub(crate) fn is_json(&self) -> bool {
        self.json
    }

    /// Prints `value` as JSON, or `text()` otherwise.
    pub(crate) fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", text());
        }
        Ok(())
    }
}

/// The error a failed operation left in the state, or `fallback`.
pub(crate) fn state_error(
    app: &App,
    pick: impl FnOnce(&RootState) -> Option<String>,
    fallback: &str,
) -> anyhow::Error {
    let message = app.store().select(pick);
    anyhow!(message.unwrap_or_else(|| fallback.to_string()))
}
