//! # Constructor Slice
//!
//! The burger being assembled. Purely local: no requests, no loading flag.
//! The state is [`BurgerConstructor`] itself; this module only maps
//! actions onto its methods.

use burger_core::{BurgerConstructor, ConstructorIngredient, Ingredient};

pub type ConstructorState = BurgerConstructor;

#[derive(Debug, Clone, PartialEq)]
pub enum ConstructorAction {
    SetBun(Ingredient),
    /// The instance id is already assigned, so replaying the action
    /// yields the same state.
    AddIngredient(ConstructorIngredient),
    /// Instance id of the filling to drop.
    RemoveIngredient(String),
    MoveIngredient { from: usize, to: usize },
    Clear,
}

impl ConstructorAction {
    /// Picks the right action for a catalog ingredient: buns go to the bun
    /// slot, everything else gets a fresh instance id and is appended.
    pub fn add(ingredient: Ingredient) -> Self {
        if ingredient.is_bun() {
            ConstructorAction::SetBun(ingredient)
        } else {
            ConstructorAction::AddIngredient(ConstructorIngredient::from(ingredient))
        }
    }

    pub fn name(&self) -> String {
        match self {
            ConstructorAction::SetBun(_) => "setBun",
            ConstructorAction::AddIngredient(_) => "addIngredient",
            ConstructorAction::RemoveIngredient(_) => "removeIngredient",
            ConstructorAction::MoveIngredient { .. } => "moveIngredient",
            ConstructorAction::Clear => "clearConstructor",
        }
        .to_string()
    }
}

pub fn reduce(state: &mut ConstructorState, action: ConstructorAction) {
    match action {
        ConstructorAction::SetBun(bun) => state.set_bun(bun),
        ConstructorAction::AddIngredient(item) => state.add_ingredient(item),
        ConstructorAction::RemoveIngredient(id) => {
            state.remove_ingredient(&id);
        }
        ConstructorAction::MoveIngredient { from, to } => {
            state.move_ingredient(from, to);
        }
        ConstructorAction::Clear => state.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burger_core::IngredientKind;

    fn main(id: &str) -> Ingredient {
        Ingredient::new(id, id, IngredientKind::Main, 100)
    }

    #[test]
    fn test_add_routes_buns_to_bun_slot() {
        let bun = Ingredient::new("bun", "Bun", IngredientKind::Bun, 988);
        assert!(matches!(ConstructorAction::add(bun), ConstructorAction::SetBun(_)));
        assert!(matches!(
            ConstructorAction::add(main("m")),
            ConstructorAction::AddIngredient(_)
        ));
    }

    #[test]
    fn test_same_ingredient_gets_distinct_instances() {
        let mut state = ConstructorState::default();
        reduce(&mut state, ConstructorAction::add(main("m")));
        reduce(&mut state, ConstructorAction::add(main("m")));

        assert_eq!(state.ingredients.len(), 2);
        assert_ne!(state.ingredients[0].id, state.ingredients[1].id);
    }

    #[test]
    fn test_remove_move_and_clear() {
        let mut state = ConstructorState::default();
        for id in ["a", "b", "c"] {
            reduce(
                &mut state,
                ConstructorAction::AddIngredient(ConstructorIngredient::with_id(main(id), id)),
            );
        }

        reduce(&mut state, ConstructorAction::MoveIngredient { from: 2, to: 0 });
        let ids: Vec<&str> = state.ingredients.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);

        reduce(&mut state, ConstructorAction::RemoveIngredient("a".into()));
        reduce(&mut state, ConstructorAction::RemoveIngredient("missing".into()));
        assert_eq!(state.ingredients.len(), 2);

        reduce(&mut state, ConstructorAction::MoveIngredient { from: 0, to: 9 });
        assert_eq!(state.ingredients[0].id, "c");

        reduce(&mut state, ConstructorAction::Clear);
        assert!(state.is_empty());
    }
}
