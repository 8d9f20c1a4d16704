//! Public feed of recent orders. Replaced wholesale on every fetch.

use serde::Serialize;

use burger_core::{FeedSnapshot, Order};

use crate::action::AsyncPhase;

pub const FETCH_FEED_ERROR: &str = "Failed to fetch feed";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedState {
    pub orders: Vec<Order>,
    pub total: u64,
    pub total_today: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedState {
    pub fn find(&self, number: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.number == number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    Fetch(AsyncPhase<FeedSnapshot>),
}

impl FeedAction {
    pub fn name(&self) -> String {
        match self {
            FeedAction::Fetch(phase) => format!("fetchFeed/{}", phase.name()),
        }
    }
}

pub fn reduce(state: &mut FeedState, action: FeedAction) {
    match action {
        FeedAction::Fetch(phase) => {
            if let Some(feed) = phase.track(&mut state.loading, &mut state.error, FETCH_FEED_ERROR) {
                state.orders = feed.orders;
                state.total = feed.total;
                state.total_today = feed.total_today;
            }
        }
    }
}
