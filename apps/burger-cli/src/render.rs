//! Plain-text views of the state. Every function reads through selectors
//! and returns a string so the output can be tested.

use std::fmt::Write;

use burger_core::{BurgerConstructor, Order, OrderSummary, User};
use burger_store::routes::{Resolution, Screen};
use burger_store::selectors::{
    select_feed_board, select_ingredient_counts, select_ingredients_by_kind,
};
use burger_store::RootState;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn catalog(state: &RootState) -> String {
    let counts = select_ingredient_counts(state);
    let mut out = String::new();

    for (kind, items) in select_ingredients_by_kind(state) {
        let _ = writeln!(out, "{}", kind);
        for item in items {
            let badge = match counts.get(&item.id) {
                Some(n) => format!("  x{}", n),
                None => String::new(),
            };
            let _ = writeln!(out, "  {:<26} {:>6}  {}{}", item.id, item.price, item.name, badge);
        }
    }
    out
}

pub fn burger(burger: &BurgerConstructor) -> String {
    let mut out = String::new();
    match &burger.bun {
        Some(bun) => {
            let _ = writeln!(out, "  {} (top)", bun.name);
        }
        None => out.push_str("  (choose a bun)\n"),
    }
    for item in &burger.ingredients {
        let _ = writeln!(out, "  {}", item.ingredient.name);
    }
    if let Some(bun) = &burger.bun {
        let _ = writeln!(out, "  {} (bottom)", bun.name);
    }
    let _ = writeln!(out, "Total: {}", burger.total_price());
    out
}

pub fn order_line(order: &Order) -> String {
    format!(
        "#{:<7} {:<10} {}  {}",
        order.number,
        order.status.to_string(),
        order.created_at.format(DATE_FORMAT),
        order.name
    )
}

pub fn orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "No orders yet\n".to_string();
    }
    orders.iter().map(|o| order_line(o) + "\n").collect()
}

pub fn feed(state: &RootState, limit: usize) -> String {
    let board = select_feed_board(state);
    let numbers = |list: &[u64]| {
        list.iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut out = String::new();
    for order in state.feed.orders.iter().take(limit) {
        let _ = writeln!(out, "{}", order_line(order));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Ready:       {}", numbers(&board.ready));
    let _ = writeln!(out, "In progress: {}", numbers(&board.pending));
    let _ = writeln!(out, "Completed all time: {}", board.total);
    let _ = writeln!(out, "Completed today:    {}", board.total_today);
    out
}

pub fn order_summary(summary: &OrderSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", summary.number, summary.name);
    let _ = writeln!(out, "Status: {}", summary.status);
    let _ = writeln!(out, "Placed: {}", summary.created_at.format(DATE_FORMAT));
    for line in &summary.lines {
        let _ = writeln!(
            out,
            "  {:<32} {} x {} = {}",
            line.ingredient.name,
            line.count,
            line.ingredient.price,
            line.line_total()
        );
    }
    let _ = writeln!(out, "Total: {}", summary.total);
    out
}

pub fn user(user: &User) -> String {
    format!("Name:  {}\nEmail: {}\n", user.name, user.email)
}

pub fn resolution(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Render(Screen { route, background }) => {
            let mut out = format!("render {}", route);
            if let Some(title) = route.modal_title() {
                match background {
                    Some(bg) => {
                        let _ = write!(out, " as modal \"{}\" over {}", title, bg);
                    }
                    None => out.push_str(" as page"),
                }
            }
            out + "\n"
        }
        Resolution::Checking => "checking session...\n".to_string(),
        Resolution::Redirect { to, from } => match from {
            Some(from) => format!("redirect to {} (return to {})\n", to, from),
            None => format!("redirect to {}\n", to),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burger_core::{ConstructorIngredient, Ingredient, IngredientKind, OrderStatus};
    use burger_store::Route;
    use chrono::{TimeZone, Utc};

    fn order(number: u64, status: OrderStatus) -> Order {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        Order {
            id: format!("id-{}", number),
            ingredients: vec!["bun".into(), "main".into(), "bun".into()],
            status,
            name: "Space burger".into(),
            created_at: at,
            updated_at: at,
            number,
        }
    }

    fn state() -> RootState {
        let mut state = RootState::default();
        state.ingredients.items = vec![
            Ingredient::new("bun", "Crater bun", IngredientKind::Bun, 1255),
            Ingredient::new("main", "Meteorite patty", IngredientKind::Main, 3000),
        ];
        state
    }

    #[test]
    fn test_catalog_groups_and_badges() {
        let mut state = state();
        state.constructor_burger.set_bun(state.ingredients.items[0].clone());

        let out = catalog(&state);
        assert!(out.starts_with("Buns\n"));
        assert!(out.contains("Crater bun  x2"));
        assert!(out.contains("Fillings\n"));
    }

    #[test]
    fn test_burger_total() {
        let state = state();
        let mut b = BurgerConstructor::new();
        b.set_bun(state.ingredients.items[0].clone());
        b.add_ingredient(ConstructorIngredient::with_id(state.ingredients.items[1].clone(), "x"));

        let out = burger(&b);
        assert!(out.contains("Crater bun (top)"));
        assert!(out.contains("Crater bun (bottom)"));
        assert!(out.ends_with("Total: 5510\n"));
    }

    #[test]
    fn test_feed_board() {
        let mut state = state();
        state.feed.orders = vec![order(1, OrderStatus::Done), order(2, OrderStatus::Pending)];
        state.feed.total = 100;
        state.feed.total_today = 10;

        let out = feed(&state, 1);
        assert!(out.contains("#1 "));
        assert!(!out.contains("#2 "));
        assert!(out.contains("Ready:       1\n"));
        assert!(out.contains("In progress: 2\n"));
        assert!(out.contains("Completed today:    10"));
    }

    #[test]
    fn test_order_summary() {
        let state = state();
        let summary = OrderSummary::build(&order(5, OrderStatus::Done), &state.ingredients.items);
        let out = order_summary(&summary);
        assert!(out.contains("Crater bun"));
        assert!(out.contains("2 x 1255 = 2510"));
        assert!(out.contains("Total: 5510"));
        assert!(out.contains("2024-01-02 03:04 UTC"));
    }

    #[test]
    fn test_orders_empty() {
        assert_eq!(orders(&[]), "No orders yet\n");
    }

    #[test]
    fn test_resolution_text() {
        let modal = Resolution::Render(Screen {
            route: Route::FeedOrder { number: 3 },
            background: Some(Route::Feed),
        });
        assert_eq!(
            resolution(&modal),
            "render /feed/3 as modal \"Order details\" over /feed\n"
        );

        let redirect = Resolution::Redirect {
            to: Route::Login,
            from: Some(Route::Profile),
        };
        assert_eq!(resolution(&redirect), "redirect to /login (return to /profile)\n");
    }
}
