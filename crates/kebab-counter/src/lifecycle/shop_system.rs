use crate::clients::OrderClient;
use crate::clock::{Clock, SystemClock};
use crate::config::ShopConfig;
use crate::order_actor::{self, OrderContext, OrderSettings};
use shop_actor::Ticker;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The running ordering core: one order actor plus the ticker that drives its
/// countdowns.
pub struct ShopSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,
    config: ShopConfig,
    ticker: Ticker,
    handles: Vec<JoinHandle<()>>,
}

impl ShopSystem {
    /// Starts the system with the wall clock.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: ShopConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: ShopConfig, clock: Arc<dyn Clock>) -> Self {
        let (order_actor, order_client) = order_actor::new();

        let context = OrderContext::new(OrderSettings::from(&config), clock);
        let order_handle = tokio::spawn(order_actor.run(context));

        let ticker = Ticker::spawn(order_client.resource().clone(), config.tick_interval());
        info!(
            preparation_minutes = config.preparation_minutes,
            tick = ?ticker.period(),
            "Shop system started"
        );

        Self {
            order_client,
            config,
            ticker,
            handles: vec![order_handle],
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Stops the ticker, closes the actor's channel and waits for the actor.
    ///
    /// Clones of [`order_client`](Self::order_client) handed out earlier keep
    /// the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down shop system...");

        self.ticker.stop().await;
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Shop system shutdown complete.");
        Ok(())
    }
}
