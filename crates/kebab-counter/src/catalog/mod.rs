//! # Menu Catalog
//!
//! Static menu data grouped into sections (Kebab, Pizza, ...). Loaded once,
//! then shared read-only: items are handed out as `Arc<MenuItem>` so cart lines
//! and orders can point at them without copying.

use crate::model::{ItemId, MenuItem};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

const BUILTIN_MENU: &str = include_str!("menu.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Menu could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate item id {0} in menu")]
    DuplicateItem(ItemId),
    #[error("Item {item} has more than one customization named '{category}'")]
    DuplicateCategory { item: ItemId, category: String },
}

/// A named tab of the menu, in display order.
#[derive(Debug, Clone)]
pub struct MenuSection {
    pub name: String,
    pub items: Vec<Arc<MenuItem>>,
}

#[derive(Deserialize)]
struct SectionFile {
    name: String,
    #[serde(default)]
    items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<MenuSection>,
}

impl Catalog {
    /// The shop's own menu, compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_MENU)
    }

    /// Parses a menu: a JSON array of `{ "name": ..., "items": [...] }` sections.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let files: Vec<SectionFile> = serde_json::from_str(json)?;
        let sections: Vec<MenuSection> = files
            .into_iter()
            .map(|section| MenuSection {
                name: section.name,
                items: section.items.into_iter().map(Arc::new).collect(),
            })
            .collect();

        let mut seen = HashSet::new();
        for item in sections.iter().flat_map(|s| &s.items) {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateItem(item.id));
            }
            let mut names = HashSet::new();
            if let Some(dup) = item
                .customization_categories
                .iter()
                .find(|c| !names.insert(c.name.as_str()))
            {
                return Err(CatalogError::DuplicateCategory {
                    item: item.id,
                    category: dup.name.clone(),
                });
            }
        }

        let catalog = Self { sections };
        info!(
            sections = catalog.sections.len(),
            items = catalog.len(),
            "Menu loaded"
        );
        Ok(catalog)
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&MenuSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Every item in menu order.
    pub fn items(&self) -> impl Iterator<Item = &Arc<MenuItem>> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn find(&self, id: ItemId) -> Option<Arc<MenuItem>> {
        let item = self.items().find(|item| item.id == id).cloned();
        debug!(%id, found = item.is_some(), "Menu lookup");
        item
    }

    pub fn find_by_name(&self, name: &str) -> Option<Arc<MenuItem>> {
        self.items().find(|item| item.name == name).cloned()
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
