use super::LineId;
use crate::customization::CustomizationError;
use crate::model::Money;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Customization rejected: {0}")]
    Customization(#[from] CustomizationError),

    #[error("Line {0} has a quantity of zero")]
    ZeroQuantity(LineId),

    /// The stored identity is not the one its item and selection derive.
    #[error("Line {0} does not match its item and selection")]
    LineIdMismatch(LineId),

    #[error("Line {line_id} carries extra cost {stored}, its options add up to {expected}")]
    ExtraCostMismatch {
        line_id: LineId,
        stored: Money,
        expected: Money,
    },
}
