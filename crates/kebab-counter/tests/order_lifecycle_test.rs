use chrono::{TimeZone, Utc};
use kebab_counter::cart::{CartError, CartLedger};
use kebab_counter::catalog::Catalog;
use kebab_counter::clock::FixedClock;
use kebab_counter::customization::{CustomizationError, Customizer};
use kebab_counter::model::{
    CustomerInfo, ItemId, Money, OrderId, OrderStatus, PaymentMethod, ResolvedOption, Selection,
};
use kebab_counter::order_actor::{OrderBook, OrderContext, OrderError, OrderSettings};
use std::sync::Arc;

fn book(preparation_ticks: u32) -> OrderBook {
    let settings = OrderSettings {
        preparation_ticks,
        pickup_choices: vec![15, 20, 30],
    };
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap());
    OrderBook::new(OrderContext::new(settings, Arc::new(clock)))
}

fn kebab_cart() -> CartLedger {
    let catalog = Catalog::builtin().unwrap();
    let kebab = catalog.find(ItemId(1)).unwrap();
    let mut customizer = Customizer::new(&kebab);
    customizer.select("Add-ons", "Cheese").unwrap();
    let mut cart = CartLedger::new();
    cart.add(&kebab, customizer.finish().unwrap()).unwrap();
    cart
}

fn ayla() -> CustomerInfo {
    CustomerInfo::new("Ayla", "0555 0100")
}

#[test]
fn placed_order_starts_preparing_with_frozen_total() {
    let mut orders = book(15);
    let cart = kebab_cart();

    let id = orders.place_order(ayla(), cart.lines()).unwrap();
    let order = orders.get(id).unwrap();

    assert_eq!(id, OrderId(1));
    assert_eq!(order.status, OrderStatus::Preparing);
    assert_eq!(order.remaining_ticks, 15);
    assert_eq!(order.total_price, "9.99".parse::<Money>().unwrap());
    assert_eq!(order.created_at.to_rfc3339(), "2026-10-19T12:00:00+00:00");
}

#[test]
fn countdown_never_goes_below_zero() {
    let mut orders = book(30);
    let id = orders.place_order(ayla(), kebab_cart().lines()).unwrap();

    for _ in 0..29 {
        orders.tick();
    }
    assert_eq!(orders.get(id).unwrap().status, OrderStatus::Preparing);
    assert_eq!(orders.get(id).unwrap().remaining_ticks, 1);

    orders.tick();
    assert_eq!(orders.get(id).unwrap().status, OrderStatus::Ready);

    for _ in 0..30 {
        assert_eq!(orders.tick(), 0);
    }
    assert_eq!(orders.get(id).unwrap().remaining_ticks, 0);
    assert_eq!(orders.get(id).unwrap().status, OrderStatus::Ready);
}

#[test]
fn pickup_completes_from_any_active_state() {
    let mut orders = book(1);
    let early = orders.place_order(ayla(), kebab_cart().lines()).unwrap();
    let on_time = orders.place_order(ayla(), kebab_cart().lines()).unwrap();

    assert_eq!(orders.mark_picked_up(early).unwrap(), OrderStatus::Completed);
    orders.tick();
    assert_eq!(orders.get(on_time).unwrap().status, OrderStatus::Ready);
    assert_eq!(orders.mark_picked_up(on_time).unwrap(), OrderStatus::Completed);

    // Repeating is harmless.
    assert_eq!(orders.mark_picked_up(on_time).unwrap(), OrderStatus::Completed);
    assert!(orders.active().is_empty());
    let completed: Vec<OrderId> = orders.completed().iter().map(|o| o.id).collect();
    assert_eq!(completed, [early, on_time]);
}

#[test]
fn completed_orders_ignore_ticks() {
    let mut orders = book(5);
    let id = orders.place_order(ayla(), kebab_cart().lines()).unwrap();
    orders.mark_picked_up(id).unwrap();
    orders.tick();
    assert_eq!(orders.get(id).unwrap().remaining_ticks, 5);
}

#[test]
fn unknown_order_is_not_found_and_nothing_changes() {
    let mut orders = book(15);
    orders.place_order(ayla(), kebab_cart().lines()).unwrap();

    assert_eq!(
        orders.mark_picked_up(OrderId(99)),
        Err(OrderError::NotFound("order_99".to_string()))
    );
    assert!(matches!(orders.delete(OrderId(99)), Err(OrderError::NotFound(_))));
    assert_eq!(orders.len(), 1);
    assert_eq!(orders.active().len(), 1);
}

#[test]
fn delete_removes_at_any_status() {
    let mut orders = book(1);
    let a = orders.place_order(ayla(), kebab_cart().lines()).unwrap();
    let b = orders.place_order(ayla(), kebab_cart().lines()).unwrap();
    let c = orders.place_order(ayla(), kebab_cart().lines()).unwrap();
    orders.mark_picked_up(c).unwrap();
    orders.tick();

    assert_eq!(orders.delete(a).unwrap().status, OrderStatus::Ready);
    assert_eq!(orders.delete(c).unwrap().status, OrderStatus::Completed);
    let left: Vec<OrderId> = orders.active().iter().map(|o| o.id).collect();
    assert_eq!(left, [b]);
}

#[test]
fn placement_is_validated() {
    let mut orders = book(15);
    let lines = kebab_cart().snapshot();

    assert_eq!(orders.place_order(ayla(), &[]), Err(OrderError::EmptyCart));
    assert_eq!(
        orders.place_order(CustomerInfo::new("  ", "0555"), &lines),
        Err(OrderError::MissingRequiredField { field: "name" })
    );
    assert_eq!(
        orders.place_order(CustomerInfo::new("Ayla", ""), &lines),
        Err(OrderError::MissingRequiredField { field: "phone" })
    );
    assert_eq!(
        orders.place_order(ayla().with_pickup_minutes(45), &lines),
        Err(OrderError::InvalidPickupTime(45))
    );
    assert!(orders.is_empty());

    // Rejections do not use up ids.
    assert_eq!(orders.place_order(ayla(), &lines), Ok(OrderId(1)));
}

#[test]
fn inconsistent_lines_are_rejected() {
    let mut orders = book(15);
    let good = kebab_cart().snapshot();

    let mut zero = good.clone();
    zero[0].quantity = 0;
    assert!(matches!(
        orders.place_order(ayla(), &zero),
        Err(OrderError::InvalidLine(CartError::ZeroQuantity(_)))
    ));

    let mut discounted = good.clone();
    discounted[0].unit_extra_cost = Money::ZERO;
    assert!(matches!(
        orders.place_order(ayla(), &discounted),
        Err(OrderError::InvalidLine(CartError::ExtraCostMismatch { .. }))
    ));

    let mut repriced = good.clone();
    let cheap = ResolvedOption::new("cheese", "Cheese", Money::ZERO);
    repriced[0].selection = Selection::new();
    repriced[0].selection.toggle("Add-ons", cheap);
    repriced[0].unit_extra_cost = Money::ZERO;
    assert!(matches!(
        orders.place_order(ayla(), &repriced),
        Err(OrderError::InvalidLine(CartError::Customization(
            CustomizationError::OptionMismatch { .. }
        )))
    ));
    assert!(orders.is_empty());

    assert_eq!(orders.place_order(ayla(), &good), Ok(OrderId(1)));
}

#[test]
fn chosen_pickup_time_sets_the_countdown() {
    let mut orders = book(15);
    let customer = ayla()
        .with_pickup_minutes(30)
        .with_payment(PaymentMethod::Card)
        .with_note("no onions please");
    let id = orders.place_order(customer, kebab_cart().lines()).unwrap();

    let order = orders.get(id).unwrap();
    assert_eq!(order.remaining_ticks, 30);
    assert_eq!(order.customer.payment_method, PaymentMethod::Card);
}

#[test]
fn cart_changes_after_placement_do_not_touch_the_order() {
    let mut orders = book(15);
    let mut cart = kebab_cart();
    let id = orders.place_order(ayla(), cart.lines()).unwrap();

    let line_id = cart.lines()[0].line_id.clone();
    cart.increment(&line_id);
    cart.increment(&line_id);
    cart.clear();

    let order = orders.get(id).unwrap();
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].quantity, 1);
    assert_eq!(order.item_count(), 1);
}

#[test]
fn receipt_lists_lines_and_total() {
    let mut orders = book(15);
    let id = orders
        .place_order(ayla().with_note("extra napkins"), kebab_cart().lines())
        .unwrap();

    let receipt = orders.get(id).unwrap().receipt("€");
    assert!(receipt.starts_with("Order order_1 [Preparing, 15 min left]\n"));
    assert!(receipt.contains("Note: extra napkins"));
    assert!(receipt.contains("1 x Chicken Kebab"));
    assert!(receipt.contains("    Add-ons: Cheese\n"));
    assert!(receipt.trim_end().ends_with("€9.99"));
}
