//! Order-specific resource logic and entity implementation.

pub mod actions;
pub mod book;
pub mod entity;
pub mod error;

pub use actions::OrderAction;
pub use book::OrderBook;
pub use error::OrderError;

use crate::clients::OrderClient;
use crate::clock::Clock;
use crate::config::ShopConfig;
use crate::model::Order;
use shop_actor::ResourceActor;
use std::sync::Arc;

/// Countdown settings taken from [`ShopConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSettings {
    /// Countdown for orders without a chosen pickup time.
    pub preparation_ticks: u32,
    pub pickup_choices: Vec<u32>,
}

impl From<&ShopConfig> for OrderSettings {
    fn from(config: &ShopConfig) -> Self {
        Self {
            preparation_ticks: config.preparation_minutes,
            pickup_choices: config.pickup_choices.clone(),
        }
    }
}

/// Runtime context injected into every Order hook.
#[derive(Debug, Clone)]
pub struct OrderContext {
    pub settings: OrderSettings,
    pub clock: Arc<dyn Clock>,
}

impl OrderContext {
    pub fn new(settings: OrderSettings, clock: Arc<dyn Clock>) -> Self {
        Self { settings, clock }
    }
}

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, OrderClient::new(generic_client))
}
