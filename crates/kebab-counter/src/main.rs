//! Demo session: customize two items, check out, let the countdown run, hand
//! the order over.
//!
//! The tick interval is shortened so the demo finishes in seconds; set
//! `KEBAB_TICK_INTERVAL_SECS` to override it.

use kebab_counter::cart::CartLedger;
use kebab_counter::catalog::Catalog;
use kebab_counter::config::ShopConfig;
use kebab_counter::customization::Customizer;
use kebab_counter::lifecycle::{setup_tracing, ShopSystem};
use kebab_counter::model::{CustomerInfo, ItemId, OrderStatus, PaymentMethod};
use kebab_counter::pricing;
use std::error::Error;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = ShopConfig {
        preparation_minutes: 3,
        tick_interval_secs: 1,
        ..ShopConfig::default()
    }
    .apply_env(|var| std::env::var(var).ok())?;
    let currency = config.currency_symbol.clone();

    let catalog = Catalog::builtin()?;
    let system = ShopSystem::new(config);

    let mut cart = CartLedger::new();
    async {
        let kebab = catalog.find(ItemId(1)).ok_or("Chicken Kebab missing from menu")?;
        let mut kebab_choice = Customizer::new(&kebab);
        kebab_choice
            .select("Sauce", "Garlic")?
            .select("Add-ons", "Cheese")?
            .select("Add-ons", "Extra Meat")?;
        let selection = kebab_choice.finish()?;
        cart.add(&kebab, selection.clone())?;
        cart.add(&kebab, selection)?;

        let pizza = catalog.find(ItemId(3)).ok_or("Margherita missing from menu")?;
        let mut pizza_choice = Customizer::new(&pizza);
        pizza_choice
            .select("Size", "Large")?
            .select("Crust", "Stuffed Crust")?;
        cart.add(&pizza, pizza_choice.finish()?)?;

        info!(
            lines = cart.len(),
            items = cart.item_count(),
            total = %pricing::display_total(cart.lines()).format_with(&currency),
            "Cart ready"
        );
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(tracing::info_span!("cart"))
    .await?;

    let customer = CustomerInfo::new("Ayla", "0555 0100")
        .with_note("extra napkins")
        .with_payment(PaymentMethod::Card);
    let order_id = system
        .order_client
        .checkout(customer, &mut cart)
        .instrument(tracing::info_span!("checkout"))
        .await?;
    info!(order_id = %order_id, cart_empty = cart.is_empty(), "Order placed");

    loop {
        tokio::time::sleep(system.config().tick_interval()).await;
        let active = system.order_client.active_orders().await?;
        let Some(order) = active.iter().find(|o| o.id == order_id) else {
            break;
        };
        info!(order_id = %order.id, status = %order.status, remaining = order.remaining_ticks, "Waiting");
        if order.status == OrderStatus::Ready {
            println!("{}", order.receipt(&currency));
            break;
        }
    }

    let status = system.order_client.mark_picked_up(order_id).await?;
    info!(order_id = %order_id, %status, "Handed over");
    let completed = system.order_client.completed_orders().await?;
    info!(completed = completed.len(), "Completed orders");

    system.shutdown().await?;
    Ok(())
}
