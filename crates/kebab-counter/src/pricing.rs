//! # Pricing Engine
//!
//! `line total = (base price + option deltas) × quantity`, and a cart total is
//! the sum of its line totals. All arithmetic is in integer micros; rounding
//! happens only when an amount is formatted.
//!
//! Option deltas may be negative, but a line may not cost less than nothing. A
//! negative line total means the menu data is inconsistent and is reported as
//! [`PricingError::NegativeLineTotal`]. A total too large for the micros
//! range is [`PricingError::Overflow`].

use crate::cart::{CartLine, LineId};
use crate::model::Money;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Line {line_id} totals {total}, below zero")]
    NegativeLineTotal { line_id: LineId, total: Money },
    #[error("Total for line {line_id} is out of range")]
    Overflow { line_id: LineId },
}

pub fn line_total(line: &CartLine) -> Result<Money, PricingError> {
    let total = line
        .item
        .base_price
        .checked_add(line.unit_extra_cost)
        .and_then(|unit| unit.checked_mul(line.quantity))
        .ok_or_else(|| PricingError::Overflow {
            line_id: line.line_id.clone(),
        })?;
    if total.is_negative() {
        return Err(PricingError::NegativeLineTotal {
            line_id: line.line_id.clone(),
            total,
        });
    }
    Ok(total)
}

pub fn cart_total(lines: &[CartLine]) -> Result<Money, PricingError> {
    lines.iter().try_fold(Money::ZERO, |total, line| {
        total
            .checked_add(line_total(line)?)
            .ok_or_else(|| PricingError::Overflow {
                line_id: line.line_id.clone(),
            })
    })
}

/// Cart total for display. Falls back to zero if the total cannot be computed,
/// logging the inconsistency.
pub fn display_total(lines: &[CartLine]) -> Money {
    cart_total(lines).unwrap_or_else(|e| {
        error!(error = %e, "Pricing inconsistency, showing zero total");
        Money::ZERO
    })
}
