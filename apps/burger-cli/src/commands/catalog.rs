//! Public screens: catalog, feed and route resolution.

use anyhow::{bail, Result};

use burger_store::{App, AppConfig, Location};

use super::{state_error, Output};
use crate::render;

pub(super) fn ingredients(app: &App, out: Output) -> Result<()> {
    let state = app.store().snapshot();
    if state.ingredients.items.is_empty() {
        return Err(state_error(
            app,
            |s| s.ingredients.error.clone(),
            "The catalog is empty",
        ));
    }
    out.emit(&state.ingredients.items, || render::catalog(&state))
}

pub(super) async fn feed(app: &App, config: &AppConfig, out: Output) -> Result<()> {
    app.navigate(&Location::new("/feed")).await;

    let state = app.store().snapshot();
    if let Some(error) = &state.feed.error {
        bail!("{}", error);
    }
    out.emit(&state.feed, || render::feed(&state, config.feed_limit))
}

pub(super) async fn route(
    app: &App,
    path: String,
    background: Option<String>,
    out: Output,
) -> Result<()> {
    let mut location = Location::new(path);
    if let Some(background) = background {
        location = location.with_background(background);
    }

    let resolution = app.navigate(&location).await;
    out.emit(&resolution, || render::resolution(&resolution))
}
