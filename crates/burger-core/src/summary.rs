//! # Read-Model Summaries
//!
//! Derived views over orders that the order-detail modal and the feed page
//! render. Nothing here is stored in state; selectors rebuild these on
//! demand.
//!
//! ## Order Detail Aggregation
//! ```text
//! order.ingredients = [bun, sauce, patty, sauce, bun]
//!                        │
//!                        ▼  group by id, keep first-seen order
//! ┌──────────────────────────────────────────────┐
//! │  bun    × 2   988   →  1976                  │
//! │  sauce  × 2    90   →   180                  │
//! │  patty  × 1   424   →   424                  │
//! ├──────────────────────────────────────────────┤
//! │  total                 2580                  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Ids missing from the catalog are skipped (the catalog may still be
//! loading, or the ingredient was withdrawn).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Ingredient, Order, OrderStatus};
use crate::FEED_BOARD_LIMIT;

// =============================================================================
// Order Summary
// =============================================================================

/// One distinct ingredient of an order and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub ingredient: Ingredient,
    pub count: u32,
}

impl OrderLine {
    /// Price of all occurrences.
    pub fn line_total(&self) -> Money {
        self.ingredient.price().times(self.count)
    }
}

/// An order joined with the catalog, ready for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub number: u64,
    pub name: String,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total: Money,
}

impl OrderSummary {
    /// Groups the order's ingredient ids with counts and prices them.
    pub fn build(order: &Order, catalog: &[Ingredient]) -> Self {
        let mut lines: Vec<OrderLine> = Vec::new();

        for id in &order.ingredients {
            if let Some(line) = lines.iter_mut().find(|l| &l.ingredient.id == id) {
                line.count += 1;
                continue;
            }
            if let Some(ingredient) = catalog.iter().find(|i| &i.id == id) {
                lines.push(OrderLine {
                    ingredient: ingredient.clone(),
                    count: 1,
                });
            }
        }

        let total: Money = lines.iter().map(OrderLine::line_total).sum();

        OrderSummary {
            number: order.number,
            name: order.name.clone(),
            status: order.status,
            created_at: order.created_at,
            lines,
            total,
        }
    }
}

// =============================================================================
// Feed Board
// =============================================================================

/// The counters panel next to the feed: ready and in-progress order
/// numbers plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeedBoard {
    /// Numbers of `done` orders, at most [`FEED_BOARD_LIMIT`].
    pub ready: Vec<u64>,
    /// Numbers of orders still being prepared, at most [`FEED_BOARD_LIMIT`].
    pub pending: Vec<u64>,
    pub total: u64,
    pub total_today: u64,
}

impl FeedBoard {
    /// Builds the board from a feed snapshot, keeping feed order.
    pub fn from_snapshot(orders: &[Order], total: u64, total_today: u64) -> Self {
        let numbers_with = |status: OrderStatus| -> Vec<u64> {
            orders
                .iter()
                .filter(|o| o.status == status)
                .map(|o| o.number)
                .take(FEED_BOARD_LIMIT)
                .collect()
        };

        FeedBoard {
            ready: numbers_with(OrderStatus::Done),
            pending: numbers_with(OrderStatus::Pending),
            total,
            total_today,
        }
    }
}
