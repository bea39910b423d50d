//! # Order Client
//!
//! High-level API for the presentation layer. Wraps a `ResourceClient<Order>`,
//! turns framework errors back into [`OrderError`], and adds the
//! place-then-clear [`checkout`](OrderClient::checkout) flow.
use crate::cart::CartLedger;
use crate::model::{CustomerInfo, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use shop_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order from `lines`. The lines are copied into the order.
    #[instrument(skip(self, customer, lines), fields(lines = lines.len()))]
    pub async fn place_order(
        &self,
        customer: CustomerInfo,
        lines: Vec<crate::cart::CartLine>,
    ) -> Result<OrderId, OrderError> {
        debug!(?customer, "place_order called");
        self.inner
            .create(OrderCreate { customer, lines })
            .await
            .map_err(Self::map_error)
    }

    /// Places an order from the cart and empties the cart, but only if the
    /// order was accepted.
    #[instrument(skip(self, customer, cart), fields(lines = cart.len()))]
    pub async fn checkout(
        &self,
        customer: CustomerInfo,
        cart: &mut CartLedger,
    ) -> Result<OrderId, OrderError> {
        let id = self.place_order(customer, cart.snapshot()).await?;
        cart.clear();
        info!(order_id = %id, "Checked out");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn mark_picked_up(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.inner
            .perform_action(id, OrderAction::MarkPickedUp)
            .await
            .map_err(Self::map_error)
    }

    /// Orders still preparing or ready, in placement order.
    pub async fn active_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        orders.retain(Order::is_active);
        Ok(orders)
    }

    pub async fn completed_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        orders.retain(|o| !o.is_active());
        Ok(orders)
    }

    /// Advances every countdown by one unit, outside the periodic ticker.
    #[instrument(skip(self))]
    pub async fn tick(&self) -> Result<usize, OrderError> {
        self.inner.tick().await.map_err(Self::map_error)
    }

    pub fn resource(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
