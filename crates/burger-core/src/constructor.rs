//! # Burger Constructor
//!
//! The in-progress burger: one optional bun plus an ordered stack of
//! fillings.
//!
//! ## Constructor Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Constructor Operations                               │
//! │                                                                         │
//! │  User Action              Operation                 Effect              │
//! │  ───────────              ─────────                 ──────              │
//! │                                                                         │
//! │  Pick a bun ─────────────► set_bun() ─────────────► bun = Some(b)      │
//! │                                                                         │
//! │  Pick a sauce / main ────► add_ingredient() ──────► stack.push(item)   │
//! │                                                                         │
//! │  Click trash icon ───────► remove_ingredient(id) ─► stack.retain(..)   │
//! │                                                                         │
//! │  Drag a layer ───────────► move_ingredient(a, b) ─► stack reordered    │
//! │                                                                         │
//! │  Close order modal ──────► clear() ───────────────► empty burger       │
//! │                                                                         │
//! │  NOTE: Every mutation is total. Unknown ids and out-of-range moves     │
//! │        leave the burger untouched.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ConstructorIngredient, Ingredient};
use crate::BUN_LAYERS;

/// The burger being assembled.
///
/// ## Invariants
/// - At most one bun
/// - Fillings keep insertion order and may repeat a catalog id
/// - Every filling has a distinct instance id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BurgerConstructor {
    /// The bun slot (top and bottom).
    pub bun: Option<Ingredient>,

    /// Fillings from top to bottom.
    pub ingredients: Vec<ConstructorIngredient>,
}

impl BurgerConstructor {
    /// Creates an empty constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a bun in the bun slot, replacing any previous bun.
    /// Fillings are not touched.
    pub fn set_bun(&mut self, bun: Ingredient) {
        self.bun = Some(bun);
    }

    /// Appends a filling to the bottom of the stack.
    pub fn add_ingredient(&mut self, item: ConstructorIngredient) {
        self.ingredients.push(item);
    }

    /// Removes the filling with the given instance id.
    ///
    /// ## Returns
    /// `true` if a filling was removed.
    pub fn remove_ingredient(&mut self, instance_id: &str) -> bool {
        let initial_len = self.ingredients.len();
        self.ingredients.retain(|item| item.id != instance_id);
        self.ingredients.len() != initial_len
    }

    /// Moves the filling at `from` so it ends up at position `to`.
    ///
    /// ## Behavior
    /// ```text
    /// [A, B, C, D]  move_ingredient(0, 2)  →  [B, C, A, D]
    /// [A, B, C, D]  move_ingredient(3, 1)  →  [A, D, B, C]
    /// ```
    ///
    /// ## Returns
    /// `false` (and no change) if either index is out of range.
    pub fn move_ingredient(&mut self, from: usize, to: usize) -> bool {
        let len = self.ingredients.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let item = self.ingredients.remove(from);
            self.ingredients.insert(to, item);
        }
        true
    }

    /// Empties the bun slot and the filling stack.
    pub fn clear(&mut self) {
        self.bun = None;
        self.ingredients.clear();
    }

    /// Checks if nothing has been picked yet.
    pub fn is_empty(&self) -> bool {
        self.bun.is_none() && self.ingredients.is_empty()
    }

    /// Total price: the bun counts twice, every filling once.
    pub fn total_price(&self) -> Money {
        let bun = self
            .bun
            .as_ref()
            .map(|b| b.price().times(BUN_LAYERS))
            .unwrap_or_default();

        bun + self
            .ingredients
            .iter()
            .map(|item| item.ingredient.price())
            .sum::<Money>()
    }

    /// Ingredient ids to submit with an order: bun, fillings, bun.
    ///
    /// ## Errors
    /// [`CoreError::MissingBun`] if no bun has been chosen.
    pub fn order_ingredient_ids(&self) -> CoreResult<Vec<String>> {
        let bun = self.bun.as_ref().ok_or(CoreError::MissingBun)?;

        let mut ids = Vec::with_capacity(self.ingredients.len() + 2);
        ids.push(bun.id.clone());
        ids.extend(self.ingredients.iter().map(|item| item.catalog_id().to_string()));
        ids.push(bun.id.clone());
        Ok(ids)
    }

    /// How many times each catalog ingredient is used, for the counters
    /// on catalog cards. The bun counts twice.
    pub fn ingredient_counts(&self) -> HashMap<String, u32> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        if let Some(bun) = &self.bun {
            counts.insert(bun.id.clone(), BUN_LAYERS);
        }
        for item in &self.ingredients {
            *counts.entry(item.catalog_id().to_string()).or_insert(0) += 1;
        }
        counts
    }
}
