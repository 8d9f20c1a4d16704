//! Order details, checkout and history.

use anyhow::{bail, Context, Result};

use burger_core::IngredientKind;
use burger_store::selectors::select_order_summary;
use burger_store::{App, Location, PlaceOrderOutcome, Resolution};

use super::{state_error, Output};
use crate::render;

pub(super) async fn show(app: &App, number: u64, out: Output) -> Result<()> {
    app.navigate(&Location::new(format!("/feed/{}", number))).await;

    match app.store().select(|s| select_order_summary(s, number)) {
        Some(summary) => out.emit(&summary, || render::order_summary(&summary)),
        None => Err(state_error(
            app,
            |s| s.orders.error.clone(),
            &format!("Order #{} not found", number),
        )),
    }
}

pub(super) async fn place(app: &App, bun: &str, fillings: &[String], out: Output) -> Result<()> {
    app.navigate(&Location::new("/")).await;

    let kind = app
        .store()
        .select(|s| s.ingredients.find(bun).map(|i| i.kind));
    match kind {
        Some(IngredientKind::Bun) => {}
        Some(other) => bail!("'{}' is not a bun ({})", bun, other),
        None => {
            return Err(state_error(
                app,
                |s| s.ingredients.error.clone(),
                &format!("Ingredient not found: {}", bun),
            ))
        }
    }

    app.add_ingredient(bun)?;
    for id in fillings {
        app.add_ingredient(id)
            .with_context(|| format!("Cannot add '{}'", id))?;
    }

    if !out.is_json() {
        let burger = app.store().select(|s| s.constructor_burger.clone());
        print!("{}", render::burger(&burger));
    }

    match app.place_order().await {
        PlaceOrderOutcome::Placed(created) => {
            out.emit(&created, || {
                format!("Order #{} placed: {}\n", created.order.number, created.name)
            })?;
            app.close_order_modal();
            Ok(())
        }
        PlaceOrderOutcome::LoginRequired => bail!("Log in first to place an order"),
        PlaceOrderOutcome::Failed => Err(state_error(
            app,
            |s| s.orders.error.clone(),
            "Failed to create order",
        )),
        PlaceOrderOutcome::Skipped => bail!("Nothing to order"),
    }
}

pub(super) async fn history(app: &App, out: Output) -> Result<()> {
    let resolution = app.navigate(&Location::new("/profile/orders")).await;
    if let Resolution::Redirect { .. } = resolution {
        bail!("Log in first to see your orders");
    }

    let state = app.store().snapshot();
    if let Some(error) = &state.orders.error {
        bail!("{}", error);
    }
    out.emit(&state.orders.orders, || render::orders(&state.orders.orders))
}
