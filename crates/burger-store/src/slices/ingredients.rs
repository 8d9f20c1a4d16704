//! Ingredient catalog, fetched once on mount.

use serde::Serialize;

use burger_core::{Ingredient, IngredientKind};

use crate::action::AsyncPhase;

pub const FETCH_INGREDIENTS_ERROR: &str = "Failed to fetch ingredients";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IngredientsState {
    pub items: Vec<Ingredient>,
    pub loading: bool,
    pub error: Option<String>,
}

impl IngredientsState {
    /// Looks an ingredient up by catalog id.
    pub fn find(&self, id: &str) -> Option<&Ingredient> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Catalog entries of one kind, in catalog order.
    pub fn of_kind(&self, kind: IngredientKind) -> impl Iterator<Item = &Ingredient> {
        self.items.iter().filter(move |i| i.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IngredientsAction {
    Fetch(AsyncPhase<Vec<Ingredient>>),
}

impl IngredientsAction {
    pub fn name(&self) -> String {
        match self {
            IngredientsAction::Fetch(phase) => format!("fetchIngredients/{}", phase.name()),
        }
    }
}

pub fn reduce(state: &mut IngredientsState, action: IngredientsAction) {
    match action {
        IngredientsAction::Fetch(phase) => {
            if let Some(items) = phase.track(&mut state.loading, &mut state.error, FETCH_INGREDIENTS_ERROR) {
                state.items = items;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Ingredient> {
        vec![
            Ingredient::new("bun", "Crater bun", IngredientKind::Bun, 1255),
            Ingredient::new("sauce", "Spicy-X", IngredientKind::Sauce, 90),
        ]
    }

    #[test]
    fn test_pending_sets_loading() {
        let mut state = IngredientsState {
            error: Some("old".into()),
            ..Default::default()
        };
        reduce(&mut state, IngredientsAction::Fetch(AsyncPhase::Pending));
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fulfilled_replaces_items() {
        let mut state = IngredientsState {
            items: vec![Ingredient::new("old", "Old", IngredientKind::Main, 1)],
            loading: true,
            error: None,
        };
        reduce(&mut state, IngredientsAction::Fetch(AsyncPhase::Fulfilled(catalog())));

        assert_eq!(state.items, catalog());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.find("sauce").map(|i| i.price), Some(90));
        assert_eq!(state.of_kind(IngredientKind::Bun).count(), 1);
    }

    #[test]
    fn test_rejected_keeps_items() {
        let mut state = IngredientsState {
            items: catalog(),
            loading: true,
            error: None,
        };
        reduce(&mut state, IngredientsAction::Fetch(AsyncPhase::rejected("Network down")));
        assert_eq!(state.error.as_deref(), Some("Network down"));
        assert_eq!(state.items, catalog());
        assert!(!state.loading);

        reduce(&mut state, IngredientsAction::Fetch(AsyncPhase::Rejected(None)));
        assert_eq!(state.error.as_deref(), Some(FETCH_INGREDIENTS_ERROR));
    }
}
