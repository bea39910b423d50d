//! Synchronous order collection.
//!
//! [`OrderBook`] applies the same rules as the Order actor, directly on an
//! [`EntityStore`], for callers that own their state and need no task.

use super::{OrderAction, OrderContext, OrderError};
use crate::cart::CartLine;
use crate::model::{CustomerInfo, Order, OrderCreate, OrderId, OrderStatus};
use shop_actor::EntityStore;

pub struct OrderBook {
    store: EntityStore<Order>,
    ctx: OrderContext,
}

impl OrderBook {
    pub fn new(ctx: OrderContext) -> Self {
        Self {
            store: EntityStore::new(),
            ctx,
        }
    }

    /// Places an order from a copy of `lines`; the caller's cart is not touched.
    pub fn place_order(
        &mut self,
        customer: CustomerInfo,
        lines: &[CartLine],
    ) -> Result<OrderId, OrderError> {
        let params = OrderCreate {
            customer,
            lines: lines.to_vec(),
        };
        Ok(self.store.create(params, &self.ctx)?)
    }

    /// Advances every countdown by one unit. Returns how many orders changed.
    pub fn tick(&mut self) -> usize {
        self.store.tick_all(&self.ctx)
    }

    pub fn mark_picked_up(&mut self, id: OrderId) -> Result<OrderStatus, OrderError> {
        Ok(self
            .store
            .perform_action(&id, OrderAction::MarkPickedUp, &self.ctx)?)
    }

    pub fn delete(&mut self, id: OrderId) -> Result<Order, OrderError> {
        Ok(self.store.delete(&id, &self.ctx)?)
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.store.get(&id)
    }

    /// Orders not yet picked up, in placement order.
    pub fn active(&self) -> Vec<&Order> {
        self.store.iter().filter(|o| o.is_active()).collect()
    }

    pub fn completed(&self) -> Vec<&Order> {
        self.store.iter().filter(|o| !o.is_active()).collect()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
