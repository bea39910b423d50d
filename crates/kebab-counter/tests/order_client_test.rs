use chrono::{TimeZone, Utc};
use kebab_counter::cart::CartLedger;
use kebab_counter::catalog::Catalog;
use kebab_counter::clients::OrderClient;
use kebab_counter::clock::FixedClock;
use kebab_counter::model::{CustomerInfo, ItemId, Order, OrderId, OrderStatus, Selection};
use kebab_counter::order_actor::{self, OrderAction, OrderContext, OrderError, OrderSettings};
use shop_actor::mock::{create_mock_client, expect_action, expect_create, MockClient};
use shop_actor::{ActorClient, FrameworkError};
use std::sync::Arc;

fn filled_cart() -> CartLedger {
    let water = Catalog::builtin().unwrap().find(ItemId(10)).unwrap();
    let mut selection = Selection::new();
    let size = water.category("Size").unwrap();
    selection.choose(
        "Size",
        kebab_counter::customization::find_option(size, "Medium").unwrap(),
    );
    let mut cart = CartLedger::new();
    cart.add(&water, selection).unwrap();
    cart
}

fn context() -> OrderContext {
    OrderContext::new(
        OrderSettings {
            preparation_ticks: 15,
            pickup_choices: vec![15, 20, 30],
        },
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())),
    )
}

/// Client logic against canned responses, no actor involved.
#[tokio::test]
async fn test_checkout_clears_cart_only_on_success() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_create()
        .return_err(FrameworkError::entity(OrderError::MissingRequiredField { field: "phone" }));
    mock.expect_create().return_ok(OrderId(1));

    let client = OrderClient::new(mock.client());
    let mut cart = filled_cart();

    let err = client
        .checkout(CustomerInfo::new("Ayla", ""), &mut cart)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::MissingRequiredField { field: "phone" });
    assert_eq!(cart.len(), 1);

    let id = client
        .checkout(CustomerInfo::new("Ayla", "0555 0100"), &mut cart)
        .await
        .unwrap();
    assert_eq!(id, OrderId(1));
    assert!(cart.is_empty());

    mock.verify();
}

#[tokio::test]
async fn test_framework_errors_are_mapped() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_action()
        .return_err(FrameworkError::NotFound("order_4".to_string()));
    mock.expect_tick().return_err(FrameworkError::ActorDropped);

    let client = OrderClient::new(mock.client());
    assert_eq!(
        client.mark_picked_up(OrderId(4)).await,
        Err(OrderError::NotFound("order_4".to_string()))
    );
    assert!(matches!(
        client.tick().await,
        Err(OrderError::ActorCommunication(_))
    ));
    mock.verify();
}

/// Inspect the exact request the client sends.
#[tokio::test]
async fn test_place_order_sends_a_copy_of_the_lines() {
    let (generic, mut receiver) = create_mock_client::<Order>(10);
    let client = OrderClient::new(generic);
    let cart = filled_cart();
    let lines = cart.snapshot();

    let task = tokio::spawn(async move {
        client
            .place_order(CustomerInfo::new("Ayla", "0555 0100"), lines)
            .await
    });

    let (params, responder) = expect_create(&mut receiver)
        .await
        .expect("Expected Create request");
    assert_eq!(params.customer.name, "Ayla");
    assert_eq!(params.lines, cart.lines());
    responder.send(Ok(OrderId(7))).unwrap();

    assert_eq!(task.await.unwrap(), Ok(OrderId(7)));
}

#[tokio::test]
async fn test_mark_picked_up_sends_action() {
    let (generic, mut receiver) = create_mock_client::<Order>(10);
    let client = OrderClient::new(generic);

    let task = tokio::spawn(async move { client.mark_picked_up(OrderId(2)).await });

    let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
    assert_eq!(id, OrderId(2));
    assert_eq!(action, OrderAction::MarkPickedUp);
    responder.send(Ok(OrderStatus::Completed)).unwrap();

    assert_eq!(task.await.unwrap(), Ok(OrderStatus::Completed));
}

/// Real Order actor behind the client.
#[tokio::test]
async fn test_order_actor_round_trip() {
    let (actor, client) = order_actor::new();
    let handle = tokio::spawn(actor.run(context()));

    let mut cart = filled_cart();
    assert_eq!(
        client
            .place_order(CustomerInfo::new("Ayla", "0555 0100"), Vec::new())
            .await,
        Err(OrderError::EmptyCart)
    );

    let first = client
        .checkout(CustomerInfo::new("Ayla", "0555 0100"), &mut cart)
        .await
        .unwrap();
    let second = client
        .place_order(CustomerInfo::new("Deniz", "0555 0200"), filled_cart().snapshot())
        .await
        .unwrap();
    assert_eq!((first, second), (OrderId(1), OrderId(2)));

    assert_eq!(client.tick().await.unwrap(), 2);
    assert_eq!(client.get(first).await.unwrap().unwrap().remaining_ticks, 14);

    client.mark_picked_up(first).await.unwrap();
    let active: Vec<OrderId> = client.active_orders().await.unwrap().iter().map(|o| o.id).collect();
    let completed: Vec<OrderId> = client
        .completed_orders()
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(active, [second]);
    assert_eq!(completed, [first]);

    assert_eq!(
        client.mark_picked_up(OrderId(42)).await,
        Err(OrderError::NotFound("order_42".to_string()))
    );
    let removed = client.delete(second).await.unwrap();
    assert_eq!(removed.customer.name, "Deniz");
    assert!(client.active_orders().await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}
