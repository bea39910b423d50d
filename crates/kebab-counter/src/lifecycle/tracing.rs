//! # Logging Setup
//!
//! Compact `tracing` output filtered by `RUST_LOG`; module paths are hidden
//! because events carry `entity_type` and `order_id` fields instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # placements, pickups, ready orders
//! RUST_LOG=debug cargo run    # plus payloads, cart steps and every tick
//! ```
//!
//! With `RUST_LOG=info` a session reads:
//!
//! ```text
//! INFO Menu loaded sections=5 items=10
//! INFO Added to cart line_id=1:{"Add-ons":["cheese","extra-meat"]} item=Chicken Kebab quantity=1
//! INFO Order placed order_id=order_1 total=10.99 remaining_ticks=15
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Order ready order_id=order_1
//! INFO Order picked up order_id=order_1 from=Ready
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
