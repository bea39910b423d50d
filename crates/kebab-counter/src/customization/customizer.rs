//! Builder behind the customization dialog.

use super::{find_option, validate, CustomizationError};
use crate::model::{MenuItem, Money, Selection, SelectionMode};
use std::sync::Arc;
use tracing::debug;

/// Builds a [`Selection`] for one item, one click at a time.
///
/// Picking in a SINGLE category replaces the previous pick; picking in a
/// MULTIPLE category toggles the option.
///
/// ```
/// # use kebab_counter::catalog::Catalog;
/// # use kebab_counter::customization::Customizer;
/// # use kebab_counter::model::ItemId;
/// let catalog = Catalog::builtin().unwrap();
/// let pizza = catalog.find(ItemId(3)).unwrap();
///
/// let mut customizer = Customizer::new(&pizza);
/// customizer.select("Size", "Large").unwrap().select("Crust", "Stuffed Crust").unwrap();
/// assert_eq!(customizer.unit_price().to_string(), "15.49");
/// assert!(customizer.finish().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Customizer {
    item: Arc<MenuItem>,
    selection: Selection,
}

impl Customizer {
    pub fn new(item: &Arc<MenuItem>) -> Self {
        Self {
            item: Arc::clone(item),
            selection: Selection::new(),
        }
    }

    pub fn item(&self) -> &Arc<MenuItem> {
        &self.item
    }

    /// Picks `option` (value or label) in `category`.
    pub fn select(&mut self, category: &str, option: &str) -> Result<&mut Self, CustomizationError> {
        let cat = self
            .item
            .category(category)
            .ok_or_else(|| CustomizationError::UnknownCategory {
                item: self.item.name.clone(),
                category: category.to_string(),
            })?;
        let resolved = find_option(cat, option).ok_or_else(|| CustomizationError::UnknownOption {
            category: category.to_string(),
            option: option.to_string(),
        })?;

        match cat.selection_mode {
            SelectionMode::Single => {
                debug!(category, value = %resolved.value, "Chosen");
                self.selection.choose(category, resolved);
            }
            SelectionMode::Multiple => {
                let value = resolved.value.clone();
                let on = self.selection.toggle(category, resolved);
                debug!(category, %value, on, "Toggled");
            }
        }
        Ok(self)
    }

    /// Clears whatever is picked in `category`.
    pub fn reset(&mut self, category: &str) -> &mut Self {
        self.selection.clear_category(category);
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Price of one unit with the current picks.
    pub fn unit_price(&self) -> Money {
        self.item.base_price + self.selection.extra_cost()
    }

    /// Checks required categories and returns the selection.
    pub fn finish(self) -> Result<Selection, CustomizationError> {
        validate(&self.item, &self.selection)?;
        Ok(self.selection)
    }
}
