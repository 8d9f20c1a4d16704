//! Public data: the ingredient catalog and the order feed.

use burger_api::BurgerApi;
use burger_core::{FeedSnapshot, Ingredient};

use crate::operations::run;
use crate::slices::feed::FeedAction;
use crate::slices::ingredients::IngredientsAction;
use crate::store::Store;

pub async fn fetch_ingredients(store: &Store, api: &dyn BurgerApi) -> Option<Vec<Ingredient>> {
    run(
        store,
        |phase| IngredientsAction::Fetch(phase).into(),
        api.get_ingredients(),
    )
    .await
}

pub async fn fetch_feed(store: &Store, api: &dyn BurgerApi) -> Option<FeedSnapshot> {
    run(store, |phase| FeedAction::Fetch(phase).into(), api.get_feed()).await
}
