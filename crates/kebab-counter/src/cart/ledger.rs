use super::{CartChange, CartError, CartLine, LineId};
use crate::customization;
use crate::model::{MenuItem, Money, Selection};
use crate::pricing::{self, PricingError};
use std::sync::Arc;
use tracing::{debug, info};

/// Ordered collection of cart lines.
///
/// Lines keep the order in which they were first added. A line leaves the
/// ledger when its quantity would drop below 1; adding it again appends it at
/// the end.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item` with `selection`.
    ///
    /// The selection is checked against the item first; a rejected selection
    /// leaves the ledger untouched.
    pub fn add(&mut self, item: &Arc<MenuItem>, selection: Selection) -> Result<CartChange, CartError> {
        customization::validate(item, &selection)?;
        let line_id = LineId::derive(item.id, &selection);

        let quantity = match self.position(&line_id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity += 1;
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(Arc::clone(item), selection));
                1
            }
        };

        info!(%line_id, item = %item.name, quantity, "Added to cart");
        Ok(CartChange::Added { line_id, quantity })
    }

    /// One more of an existing line.
    pub fn increment(&mut self, line_id: &LineId) -> CartChange {
        let Some(index) = self.position(line_id) else {
            debug!(%line_id, "Increment of missing line ignored");
            return CartChange::Unchanged;
        };
        let line = &mut self.lines[index];
        line.quantity += 1;
        debug!(%line_id, quantity = line.quantity, "Incremented");
        CartChange::Incremented {
            line_id: line_id.clone(),
            quantity: line.quantity,
        }
    }

    /// One fewer of a line; the line is removed when it reaches zero.
    pub fn decrement(&mut self, line_id: &LineId) -> CartChange {
        let Some(index) = self.position(line_id) else {
            debug!(%line_id, "Decrement of missing line ignored");
            return CartChange::Unchanged;
        };
        if self.lines[index].quantity <= 1 {
            self.lines.remove(index);
            info!(%line_id, "Removed from cart");
            return CartChange::Removed {
                line_id: line_id.clone(),
            };
        }
        let line = &mut self.lines[index];
        line.quantity -= 1;
        debug!(%line_id, quantity = line.quantity, "Decremented");
        CartChange::Decremented {
            line_id: line_id.clone(),
            quantity: line.quantity,
        }
    }

    /// Drops a line regardless of its quantity.
    pub fn remove_completely(&mut self, line_id: &LineId) -> CartChange {
        match self.position(line_id) {
            Some(index) => {
                self.lines.remove(index);
                info!(%line_id, "Removed from cart");
                CartChange::Removed {
                    line_id: line_id.clone(),
                }
            }
            None => {
                debug!(%line_id, "Remove of missing line ignored");
                CartChange::Unchanged
            }
        }
    }

    pub fn clear(&mut self) -> CartChange {
        let lines = self.lines.len();
        self.lines.clear();
        info!(lines, "Cart cleared");
        CartChange::Cleared { lines }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, line_id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.line_id == line_id)
    }

    /// An independent copy of the lines, for placing an order.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self) -> Result<Money, PricingError> {
        pricing::cart_total(&self.lines)
    }

    fn position(&self, line_id: &LineId) -> Option<usize> {
        self.lines.iter().position(|line| &line.line_id == line_id)
    }
}
