use kebab_counter::cart::{CartChange, CartLedger};
use kebab_counter::catalog::Catalog;
use kebab_counter::customization::Customizer;
use kebab_counter::model::{ItemId, MenuItem, Money, Selection};
use kebab_counter::pricing::{self, PricingError};
use std::sync::Arc;

fn menu_item(id: u32) -> Arc<MenuItem> {
    Catalog::builtin().unwrap().find(ItemId(id)).unwrap()
}

fn pick(item: &Arc<MenuItem>, picks: &[(&str, &str)]) -> Selection {
    let mut customizer = Customizer::new(item);
    for (category, option) in picks {
        customizer.select(category, option).unwrap();
    }
    customizer.finish().unwrap()
}

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

#[test]
fn chicken_kebab_with_two_addons() {
    let kebab = menu_item(1);
    let mut cart = CartLedger::new();

    let selection = pick(&kebab, &[("Add-ons", "Cheese"), ("Add-ons", "Extra Meat")]);
    cart.add(&kebab, selection.clone()).unwrap();
    assert_eq!(pricing::line_total(&cart.lines()[0]).unwrap(), money("10.99"));

    cart.add(&kebab, selection).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(cart.total().unwrap(), money("21.98"));
}

#[test]
fn large_stuffed_crust_margherita() {
    let pizza = menu_item(3);
    let mut cart = CartLedger::new();
    cart.add(
        &pizza,
        pick(&pizza, &[("Size", "Large"), ("Crust", "Stuffed Crust")]),
    )
    .unwrap();

    assert_eq!(cart.total().unwrap(), money("15.49"));
    assert_eq!(cart.total().unwrap().format_with("€"), "€15.49");
}

#[test]
fn small_cola_uses_negative_modifier() {
    let cola = menu_item(9);
    let mut cart = CartLedger::new();
    cart.add(&cola, pick(&cola, &[("Size", "Small"), ("Ice", "No Ice")]))
        .unwrap();
    assert_eq!(cart.total().unwrap(), money("2.49"));
}

#[test]
fn total_is_sum_of_line_totals() {
    let kebab = menu_item(1);
    let salad = menu_item(5);
    let mut cart = CartLedger::new();

    cart.add(&kebab, pick(&kebab, &[("Sauce", "Chili")])).unwrap();
    cart.add(&kebab, pick(&kebab, &[("Sauce", "Chili")])).unwrap();
    cart.add(&salad, pick(&salad, &[("Add-ons", "Avocado")])).unwrap();
    cart.add(&salad, pick(&salad, &[("Remove Ingredients", "Olives")]))
        .unwrap();

    let by_line: Money = cart
        .lines()
        .iter()
        .map(|line| pricing::line_total(line).unwrap())
        .sum();
    assert_eq!(cart.total().unwrap(), by_line);
    // 2 × 8.99 + (7.99 + 2.00) + 7.99
    assert_eq!(by_line, money("35.96"));
}

#[test]
fn add_then_decrement_restores_the_cart() {
    let kebab = menu_item(1);
    let pizza = menu_item(4);
    let mut cart = CartLedger::new();
    cart.add(&pizza, pick(&pizza, &[("Size", "Medium"), ("Crust", "Thin")]))
        .unwrap();
    let before: Vec<_> = cart.lines().to_vec();

    let change = cart.add(&kebab, Selection::new()).unwrap();
    let CartChange::Added { line_id, quantity } = change.clone() else {
        panic!("expected Added, got {change:?}");
    };
    assert_eq!(quantity, 1);
    cart.decrement(&line_id);

    assert_eq!(cart.lines(), before.as_slice());
}

#[test]
fn decrement_then_add_restores_the_quantity() {
    let kebab = menu_item(1);
    let water = menu_item(10);
    let mut cart = CartLedger::new();
    let selection = pick(&kebab, &[("Add-ons", "Cheese")]);
    cart.add(&kebab, selection.clone()).unwrap();
    cart.add(&kebab, selection.clone()).unwrap();
    cart.add(&water, pick(&water, &[("Size", "Small")])).unwrap();
    let before: Vec<_> = cart.lines().to_vec();
    let id = before[0].line_id.clone();

    assert_eq!(
        cart.decrement(&id),
        CartChange::Decremented { line_id: id.clone(), quantity: 1 }
    );
    assert_eq!(
        cart.add(&kebab, selection).unwrap(),
        CartChange::Added { line_id: id.clone(), quantity: 2 }
    );

    // The line never left, so it keeps its place.
    assert_eq!(cart.lines(), before.as_slice());
}

#[test]
fn re_adding_a_removed_line_appends_it() {
    let kebab = menu_item(1);
    let water = menu_item(10);
    let mut cart = CartLedger::new();
    let selection = pick(&kebab, &[("Sauce", "Garlic")]);
    cart.add(&kebab, selection.clone()).unwrap();
    cart.add(&water, pick(&water, &[("Size", "Large")])).unwrap();
    let id = cart.lines()[0].line_id.clone();

    assert_eq!(cart.decrement(&id), CartChange::Removed { line_id: id.clone() });
    assert_eq!(cart.len(), 1);

    assert_eq!(
        cart.add(&kebab, selection).unwrap(),
        CartChange::Added { line_id: id.clone(), quantity: 1 }
    );
    // Same identity and quantity as before, now after the water.
    assert_eq!(cart.lines()[1].line_id, id);
    assert_eq!(cart.lines()[1].quantity, 1);
    assert_eq!(cart.lines()[0].item.id, ItemId(10));
}

#[test]
fn remove_completely_drops_any_quantity() {
    let water = menu_item(10);
    let mut cart = CartLedger::new();
    let selection = pick(&water, &[("Size", "Large")]);
    for _ in 0..4 {
        cart.add(&water, selection.clone()).unwrap();
    }
    let id = cart.lines()[0].line_id.clone();

    assert_eq!(cart.remove_completely(&id), CartChange::Removed { line_id: id.clone() });
    assert!(cart.is_empty());
    assert_eq!(cart.total().unwrap(), Money::ZERO);
}

#[test]
fn inconsistent_menu_prices_are_reported() {
    let item: MenuItem = serde_json::from_str(
        r#"{
            "id": 50,
            "name": "Mini Water",
            "price": 0.50,
            "customizations": [
                {
                    "name": "Size", "type": "single",
                    "options": ["Tiny"],
                    "priceModifier": { "Tiny": -1.00 }
                }
            ]
        }"#,
    )
    .unwrap();
    let item = Arc::new(item);
    let mut cart = CartLedger::new();
    cart.add(&item, pick(&item, &[("Size", "Tiny")])).unwrap();

    assert!(matches!(
        cart.total(),
        Err(PricingError::NegativeLineTotal { total, .. }) if total == money("-0.5")
    ));
    assert_eq!(pricing::display_total(cart.lines()), Money::ZERO);
}
