//! Resolved customization choices for one item.

use crate::model::Money;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An option after resolution: a stable key, a display label and a price delta.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedOption {
    pub value: String,
    pub label: String,
    pub price: Money,
}

impl ResolvedOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, price: Money) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            price,
        }
    }

    /// Placeholder for an option that could not be read.
    pub fn unknown() -> Self {
        Self::new("unknown", "Unknown Option", Money::ZERO)
    }

    pub fn is_unknown(&self) -> bool {
        self.value == "unknown" && self.label == "Unknown Option"
    }
}

/// What is chosen in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Single(ResolvedOption),
    /// Keyed by option value, so an option can appear at most once.
    Multiple(BTreeMap<String, ResolvedOption>),
}

impl Choice {
    pub fn options(&self) -> Vec<&ResolvedOption> {
        match self {
            Choice::Single(option) => vec![option],
            Choice::Multiple(set) => set.values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Choice::Single(_) => 1,
            Choice::Multiple(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Category name → choice. An empty MULTIPLE set counts as no choice at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, Choice>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the single choice of `category`, replacing any previous one.
    pub fn choose(&mut self, category: impl Into<String>, option: ResolvedOption) {
        self.0.insert(category.into(), Choice::Single(option));
    }

    /// Adds `option` to a multi-select category, or removes it if it is already
    /// there. Returns whether the option is selected afterwards.
    pub fn toggle(&mut self, category: &str, option: ResolvedOption) -> bool {
        if let Some(Choice::Multiple(set)) = self.0.get_mut(category) {
            let selected = if set.remove(&option.value).is_some() {
                false
            } else {
                set.insert(option.value.clone(), option);
                true
            };
            if set.is_empty() {
                self.0.remove(category);
            }
            return selected;
        }

        let mut set = BTreeMap::new();
        set.insert(option.value.clone(), option);
        self.0.insert(category.to_string(), Choice::Multiple(set));
        true
    }

    /// Drops everything chosen in `category`.
    pub fn clear_category(&mut self, category: &str) -> Option<Choice> {
        self.0.remove(category)
    }

    /// The choice for `category`, treating an empty set as absent.
    pub fn get(&self, category: &str) -> Option<&Choice> {
        self.0.get(category).filter(|choice| !choice.is_empty())
    }

    pub fn has(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    pub fn is_selected(&self, category: &str, value: &str) -> bool {
        self.get(category)
            .is_some_and(|choice| choice.options().iter().any(|o| o.value == value))
    }

    /// Non-empty categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Choice)> {
        self.0
            .iter()
            .filter(|(_, choice)| !choice.is_empty())
            .map(|(name, choice)| (name.as_str(), choice))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Sum of the price deltas of every chosen option.
    pub fn extra_cost(&self) -> Money {
        self.iter()
            .flat_map(|(_, choice)| choice.options())
            .map(|option| option.price)
            .sum()
    }

    /// Order-independent text form: `{"category":["value",...],...}` with
    /// sorted category names and sorted values. Two selections that pick the same
    /// options produce the same key no matter how they were built.
    pub fn canonical_key(&self) -> String {
        let map: serde_json::Map<String, Value> = self
            .iter()
            .map(|(name, choice)| {
                let mut values: Vec<&str> =
                    choice.options().into_iter().map(|o| o.value.as_str()).collect();
                values.sort_unstable();
                let values = values.into_iter().map(|v| Value::String(v.to_string()));
                (name.to_string(), Value::Array(values.collect()))
            })
            .collect();
        Value::Object(map).to_string()
    }
}
