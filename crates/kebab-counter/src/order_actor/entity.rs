//! Entity trait implementation for [`Order`].
//!
//! Placement rules, in the order they are checked:
//! 1. at least one cart line ([`OrderError::EmptyCart`]);
//! 2. non-blank customer name, then phone ([`OrderError::MissingRequiredField`]);
//! 3. a chosen pickup time must be one of the offered choices
//!    ([`OrderError::InvalidPickupTime`]);
//! 4. every line is consistent with its item and selection
//!    ([`OrderError::InvalidLine`]);
//! 5. the lines must price to a non-negative total ([`OrderError::Pricing`]).
//!
//! Countdown: each tick takes one unit off a Preparing order; the tick that
//! reaches zero makes it Ready. Ready and Completed orders ignore ticks.

use super::{OrderAction, OrderContext, OrderError};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::pricing;
use shop_actor::ActorEntity;
use tracing::{debug, info, warn};

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        ctx: &OrderContext,
    ) -> Result<Self, OrderError> {
        let OrderCreate { customer, lines } = params;

        if lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if customer.name.trim().is_empty() {
            return Err(OrderError::MissingRequiredField { field: "name" });
        }
        if customer.phone.trim().is_empty() {
            return Err(OrderError::MissingRequiredField { field: "phone" });
        }

        let remaining_ticks = match customer.pickup_minutes {
            None => ctx.settings.preparation_ticks,
            Some(minutes) if ctx.settings.pickup_choices.contains(&minutes) => minutes,
            Some(minutes) => return Err(OrderError::InvalidPickupTime(minutes)),
        };
        for line in &lines {
            line.check().inspect_err(|e| warn!(error = %e, "Rejected cart line"))?;
        }
        let total_price = pricing::cart_total(&lines)?;

        let order = Order {
            id,
            customer,
            lines,
            total_price,
            status: OrderStatus::Preparing,
            remaining_ticks,
            created_at: ctx.clock.now(),
        };
        info!(order_id = %order.id, total = %order.total_price, remaining_ticks, "Order placed");
        Ok(order)
    }

    fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderStatus, OrderError> {
        match action {
            OrderAction::MarkPickedUp => {
                if self.status == OrderStatus::Completed {
                    debug!(order_id = %self.id, "Already picked up");
                } else {
                    info!(order_id = %self.id, from = %self.status, "Order picked up");
                    self.status = OrderStatus::Completed;
                }
                Ok(self.status)
            }
        }
    }

    fn on_tick(&mut self, _ctx: &OrderContext) -> bool {
        if self.status != OrderStatus::Preparing {
            return false;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.status = OrderStatus::Ready;
            info!(order_id = %self.id, "Order ready");
        }
        true
    }
}
