//! # System Lifecycle
//!
//! Starts the order actor and its ticker, hands out the client, and shuts both
//! down in the right order.
//!
//! ```rust,ignore
//! let system = ShopSystem::new(ShopConfig::from_env()?);
//! let id = system.order_client.checkout(customer, &mut cart).await?;
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown order
//!
//! The ticker holds a client clone, so it is stopped first. Then the remaining
//! clients are dropped, which closes the actor's channel, and the actor task is
//! awaited.
//!
//! ## Context injection
//!
//! The order actor receives an [`OrderContext`](crate::order_actor::OrderContext)
//! (countdown settings and a [`Clock`](crate::clock::Clock)) through
//! `run(context)`. Swap the clock with [`ShopSystem::with_clock`] to make
//! timestamps deterministic.

pub mod shop_system;
pub mod tracing;

pub use shop_system::{LifecycleError, ShopSystem};
pub use self::tracing::setup_tracing;
