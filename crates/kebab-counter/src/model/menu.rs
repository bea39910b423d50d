//! Menu data as it is authored: items, their customization categories and the
//! raw option shapes found in menu files.
//!
//! These types mirror the JSON menu format (`price`, `customizations`, `type`,
//! `extraCost`, `priceModifier`). Nothing here is resolved yet; see
//! [`crate::customization`] for turning a [`RawOption`] into a priced
//! [`ResolvedOption`](crate::model::ResolvedOption).

use crate::model::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Catalog identifier of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable item. Owned by the catalog and shared behind `Arc`; never mutated
/// after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "price")]
    pub base_price: Money,
    #[serde(rename = "customizations", default)]
    pub customization_categories: Vec<CustomizationCategory>,
}

impl MenuItem {
    /// Looks up a category by its exact name.
    pub fn category(&self, name: &str) -> Option<&CustomizationCategory> {
        self.customization_categories.iter().find(|c| c.name == name)
    }

    pub fn required_categories(&self) -> impl Iterator<Item = &CustomizationCategory> {
        self.customization_categories.iter().filter(|c| c.required)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Exactly one option at a time (radio buttons).
    Single,
    /// Any subset of the options (checkboxes).
    Multiple,
}

/// One group of choices on an item, e.g. "Size" or "Add-ons".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub selection_mode: SelectionMode,
    #[serde(default)]
    pub options: Vec<RawOption>,
    #[serde(default)]
    pub required: bool,
    /// Per-label price deltas; may be negative (a small pizza is cheaper).
    #[serde(rename = "priceModifier", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub price_modifier_by_option: BTreeMap<String, Money>,
    /// Cost charged for each selected option of a MULTIPLE category.
    #[serde(rename = "extraCost", default, skip_serializing_if = "Option::is_none")]
    pub flat_extra_cost_per_selected_option: Option<Money>,
}

/// An option as written in menu data.
///
/// Menu files mix bare labels (`"Garlic"`) and objects
/// (`{"label": "Garlic", "value": "garlic", "price": 0.5}`). Anything else is
/// kept as `Malformed` so that loading never fails because of one bad entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    Label(String),
    Detailed(OptionSpec),
    Malformed(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

impl From<&str> for RawOption {
    fn from(label: &str) -> Self {
        RawOption::Label(label.to_string())
    }
}
