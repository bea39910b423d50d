//! # Kebab Counter
//!
//! Ordering core for a kebab and pizza counter: menu, customization, cart,
//! pricing and the order lifecycle. State lives in memory for one session.
//!
//! - [`catalog`]: the menu, grouped into sections.
//! - [`customization`]: raw menu options → priced [`ResolvedOption`](model::ResolvedOption)s,
//!   and the [`Customizer`](customization::Customizer) that builds a selection.
//! - [`cart`]: the [`CartLedger`](cart::CartLedger).
//! - [`pricing`]: line and cart totals.
//! - [`order_actor`]: the `Order` entity, served by a `ResourceActor`, and the
//!   synchronous [`OrderBook`](order_actor::OrderBook).
//! - [`clients`]: [`OrderClient`](clients::OrderClient), the async API for presentation.
//! - [`lifecycle`]: [`ShopSystem`](lifecycle::ShopSystem) wiring actor and ticker.
//!
//! ## Testing
//!
//! See [`shop_actor::mock`] for utilities to test clients without spawning an actor.

pub mod cart;
pub mod catalog;
pub mod clients;
pub mod clock;
pub mod config;
pub mod customization;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
