//! # Selectors
//!
//! Read-only views over [`RootState`]. Views never reach into the tree
//! directly; they call one of these through [`crate::Store::select`].

use std::collections::HashMap;

use burger_core::{
    BurgerConstructor, FeedBoard, Ingredient, IngredientKind, Money, Order, OrderSummary, User,
};

use crate::root::RootState;

// =============================================================================
// Ingredients & Constructor
// =============================================================================

pub fn select_ingredients(state: &RootState) -> &[Ingredient] {
    &state.ingredients.items
}

pub fn select_ingredient<'a>(state: &'a RootState, id: &str) -> Option<&'a Ingredient> {
    state.ingredients.find(id)
}

/// Catalog grouped by kind in tab order (buns, sauces, fillings).
pub fn select_ingredients_by_kind(state: &RootState) -> Vec<(IngredientKind, Vec<&Ingredient>)> {
    IngredientKind::ALL
        .iter()
        .map(|&kind| (kind, state.ingredients.of_kind(kind).collect()))
        .collect()
}

pub fn select_constructor(state: &RootState) -> &BurgerConstructor {
    &state.constructor_burger
}

pub fn select_constructor_price(state: &RootState) -> Money {
    state.constructor_burger.total_price()
}

/// Counter badge for each catalog card.
pub fn select_ingredient_counts(state: &RootState) -> HashMap<String, u32> {
    state.constructor_burger.ingredient_counts()
}

// =============================================================================
// Orders & Feed
// =============================================================================

pub fn select_orders(state: &RootState) -> &[Order] {
    &state.orders.orders
}

pub fn select_current_order(state: &RootState) -> Option<&Order> {
    state.orders.current_order.as_ref()
}

/// An order already somewhere in the tree: the current order, the feed or
/// the user's history, checked in that order.
pub fn select_order_by_number(state: &RootState, number: u64) -> Option<&Order> {
    state
        .orders
        .current_order
        .as_ref()
        .filter(|o| o.number == number)
        .or_else(|| state.feed.find(number))
        .or_else(|| state.orders.find(number))
}

/// The detail view of an order joined with the catalog.
pub fn select_order_summary(state: &RootState, number: u64) -> Option<OrderSummary> {
    select_order_by_number(state, number)
        .map(|order| OrderSummary::build(order, &state.ingredients.items))
}

pub fn select_feed_board(state: &RootState) -> FeedBoard {
    FeedBoard::from_snapshot(&state.feed.orders, state.feed.total, state.feed.total_today)
}

// =============================================================================
// User
// =============================================================================

pub fn select_user(state: &RootState) -> Option<&User> {
    state.user.user.as_ref()
}

pub fn select_is_authenticated(state: &RootState) -> bool {
    state.user.is_authenticated()
}

pub fn select_password_reset_requested(state: &RootState) -> bool {
    state.user.password_reset_requested
}

#[cfg(test)]
mod tests {
    use super::*;
    use burger_core::{ConstructorIngredient, OrderStatus};
    use chrono::Utc;

    fn order(number: u64, status: OrderStatus) -> Order {
        Order {
            id: format!("id-{}", number),
            ingredients: vec!["bun".into(), "main".into(), "bun".into()],
            status,
            name: format!("Burger {}", number),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            number,
        }
    }

    fn state() -> RootState {
        let mut state = RootState::default();
        state.ingredients.items = vec![
            Ingredient::new("bun", "Bun", IngredientKind::Bun, 100),
            Ingredient::new("main", "Patty", IngredientKind::Main, 50),
            Ingredient::new("sauce", "Sauce", IngredientKind::Sauce, 10),
        ];
        state.feed.orders = vec![order(1, OrderStatus::Done), order(2, OrderStatus::Pending)];
        state.feed.total = 2;
        state.orders.orders = vec![order(3, OrderStatus::Created)];
        state
    }

    #[test]
    fn test_ingredients_by_kind_in_tab_order() {
        let state = state();
        let groups = select_ingredients_by_kind(&state);
        let kinds: Vec<IngredientKind> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, IngredientKind::ALL.to_vec());
        assert_eq!(groups[0].1[0].id, "bun");
        assert_eq!(select_ingredient(&state, "sauce").map(|i| i.price), Some(10));
    }

    #[test]
    fn test_constructor_price_and_counts() {
        let mut state = state();
        let bun = select_ingredient(&state, "bun").cloned().unwrap();
        let main = select_ingredient(&state, "main").cloned().unwrap();
        state.constructor_burger.set_bun(bun);
        state.constructor_burger.add_ingredient(ConstructorIngredient::with_id(main, "x"));

        assert_eq!(select_constructor_price(&state).amount(), 250);
        assert_eq!(select_ingredient_counts(&state).get("bun"), Some(&2));
        assert_eq!(select_constructor(&state).ingredients.len(), 1);
    }

    #[test]
    fn test_order_lookup_order() {
        let mut state = state();
        assert_eq!(select_order_by_number(&state, 2).map(|o| o.number), Some(2));
        assert_eq!(select_order_by_number(&state, 3).map(|o| o.number), Some(3));
        assert!(select_order_by_number(&state, 99).is_none());

        let mut current = order(1, OrderStatus::Done);
        current.name = "Current".into();
        state.orders.current_order = Some(current);
        assert_eq!(
            select_order_by_number(&state, 1).map(|o| o.name.as_str()),
            Some("Current")
        );
    }

    #[test]
    fn test_order_summary_and_board() {
        let state = state();
        let summary = select_order_summary(&state, 1).unwrap();
        assert_eq!(summary.total.amount(), 250);

        let board = select_feed_board(&state);
        assert_eq!(board.ready, vec![1]);
        assert_eq!(board.pending, vec![2]);
    }

    #[test]
    fn test_user_selectors() {
        let mut state = RootState::default();
        assert!(!select_is_authenticated(&state));
        assert!(select_user(&state).is_none());

        state.user.user = Some(User {
            email: "a@b.com".into(),
            name: "A".into(),
        });
        state.user.password_reset_requested = true;
        assert!(select_is_authenticated(&state));
        assert!(select_password_reset_requested(&state));
        assert!(select_orders(&state).is_empty());
        assert!(select_current_order(&state).is_none());
        assert!(select_ingredients(&state).is_empty());
    }
}
