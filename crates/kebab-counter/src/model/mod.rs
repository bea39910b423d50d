//! Domain data types shared by every layer.

pub mod menu;
pub mod money;
pub mod order;
pub mod selection;

pub use menu::{CustomizationCategory, ItemId, MenuItem, OptionSpec, RawOption, SelectionMode};
pub use money::{Money, MoneyError};
pub use order::{CustomerInfo, Order, OrderCreate, OrderId, OrderStatus, PaymentMethod};
pub use selection::{Choice, ResolvedOption, Selection};
