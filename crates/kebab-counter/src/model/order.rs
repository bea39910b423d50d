//! Placed orders.
//!
//! An [`Order`] is managed by a [`ResourceActor`](shop_actor::ResourceActor); its
//! [`ActorEntity`](shop_actor::ActorEntity) implementation lives in
//! [`crate::order_actor`]. See there for creation rules and the countdown.

use crate::cart::CartLine;
use crate::model::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Write};

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => f.write_str("Cash"),
            PaymentMethod::Card => f.write_str("Card"),
        }
    }
}

/// Who the order is for and how they pay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Pickup time picked by the customer, in minutes. Must be one of the
    /// configured choices; `None` uses the default preparation time.
    #[serde(default)]
    pub pickup_minutes: Option<u32>,
}

impl CustomerInfo {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_payment(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    pub fn with_pickup_minutes(mut self, minutes: u32) -> Self {
        self.pickup_minutes = Some(minutes);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Preparing,
    Ready,
    Completed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Preparing => f.write_str("Preparing"),
            OrderStatus::Ready => f.write_str("Ready"),
            OrderStatus::Completed => f.write_str("Completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: CustomerInfo,
    /// Snapshot of the cart at placement time.
    pub lines: Vec<CartLine>,
    /// Frozen at placement.
    pub total_price: Money,
    pub status: OrderStatus,
    /// Ticks left until the order is ready.
    pub remaining_ticks: u32,
    pub created_at: DateTime<Utc>,
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: CustomerInfo,
    pub lines: Vec<CartLine>,
}

impl Order {
    pub fn is_active(&self) -> bool {
        self.status != OrderStatus::Completed
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Renders a plain-text receipt.
    ///
    /// ```text
    /// Order order_1 [Preparing, 15 min left]
    /// Customer: Ayla (0555 0100)
    /// Payment: Cash
    /// Placed: 2026-10-19 12:00 UTC
    /// ----------------------------------------
    /// 2 x Chicken Kebab                  €21.98
    ///     Add-ons: Cheese, Extra Meat
    /// ----------------------------------------
    /// Total                              €21.98
    /// ```
    pub fn receipt(&self, currency_symbol: &str) -> String {
        const WIDTH: usize = 40;
        let rule = "-".repeat(WIDTH);
        let mut out = String::new();

        let status = match self.status {
            OrderStatus::Preparing => format!("{}, {} min left", self.status, self.remaining_ticks),
            _ => self.status.to_string(),
        };
        let _ = writeln!(out, "Order {} [{}]", self.id, status);
        let _ = writeln!(out, "Customer: {} ({})", self.customer.name, self.customer.phone);
        let _ = writeln!(out, "Payment: {}", self.customer.payment_method);
        if let Some(note) = self.customer.note.as_deref().filter(|n| !n.trim().is_empty()) {
            let _ = writeln!(out, "Note: {note}");
        }
        let _ = writeln!(out, "Placed: {}", self.created_at.format("%Y-%m-%d %H:%M UTC"));
        let _ = writeln!(out, "{rule}");

        for line in &self.lines {
            let left = format!("{} x {}", line.quantity, line.item.name);
            let right = line.subtotal().format_with(currency_symbol);
            let _ = writeln!(out, "{}", pad_between(&left, &right, WIDTH));
            for options in crate::customization::describe(&line.selection) {
                let _ = writeln!(out, "    {options}");
            }
        }

        let _ = writeln!(out, "{rule}");
        let total = self.total_price.format_with(currency_symbol);
        let _ = writeln!(out, "{}", pad_between("Total", &total, WIDTH));
        out
    }
}

fn pad_between(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}
