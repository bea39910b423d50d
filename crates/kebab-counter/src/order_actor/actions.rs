//! Custom actions for the Order actor.

/// Staff actions on a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// The customer collected the order. Allowed from Preparing or Ready;
    /// repeating it on a completed order changes nothing.
    MarkPickedUp,
}
