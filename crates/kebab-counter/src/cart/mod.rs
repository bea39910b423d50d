//! # Cart Ledger
//!
//! The live cart: customized items with quantities, keyed by a line identity
//! derived from the item and its selection. Adding the same item with the same
//! picks bumps the quantity of the existing line; any difference in picks makes
//! a new line.
//!
//! Every mutation returns a [`CartChange`] so the caller can refresh exactly
//! what changed.

pub mod error;
pub mod ledger;

pub use error::CartError;
pub use ledger::CartLedger;

use crate::model::{ItemId, MenuItem, Money, Selection};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

/// Identity of a cart line: `"{item id}:{canonical selection}"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn derive(item: ItemId, selection: &Selection) -> Self {
        Self(format!("{}:{}", item, selection.canonical_key()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub line_id: LineId,
    pub item: Arc<MenuItem>,
    /// Always at least 1 while the line is in a ledger.
    pub quantity: u32,
    pub selection: Selection,
    /// Sum of the selected options' price deltas, per unit.
    pub unit_extra_cost: Money,
}

impl CartLine {
    pub fn new(item: Arc<MenuItem>, selection: Selection) -> Self {
        Self {
            line_id: LineId::derive(item.id, &selection),
            unit_extra_cost: selection.extra_cost(),
            item,
            quantity: 1,
            selection,
        }
    }

    /// Checks a line that did not come from a [`CartLedger`]: the quantity is
    /// at least 1, the identity and extra cost follow from the selection, and
    /// the selection matches the item's menu entry.
    pub fn check(&self) -> Result<(), CartError> {
        if self.quantity == 0 {
            return Err(CartError::ZeroQuantity(self.line_id.clone()));
        }
        if self.line_id != LineId::derive(self.item.id, &self.selection) {
            return Err(CartError::LineIdMismatch(self.line_id.clone()));
        }
        let expected = self.selection.extra_cost();
        if self.unit_extra_cost != expected {
            return Err(CartError::ExtraCostMismatch {
                line_id: self.line_id.clone(),
                stored: self.unit_extra_cost,
                expected,
            });
        }
        crate::customization::validate(&self.item, &self.selection)?;
        Ok(())
    }

    pub fn unit_price(&self) -> Money {
        self.item.base_price + self.unit_extra_cost
    }

    /// Unit price times quantity, without sign checks. Use
    /// [`pricing::line_total`](crate::pricing::line_total) where a negative
    /// total must be caught.
    pub fn subtotal(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

/// What a ledger mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A line was created or an identical one bumped; `quantity` is the new count.
    Added { line_id: LineId, quantity: u32 },
    Incremented { line_id: LineId, quantity: u32 },
    Decremented { line_id: LineId, quantity: u32 },
    Removed { line_id: LineId },
    Cleared { lines: usize },
    /// The line did not exist.
    Unchanged,
}
