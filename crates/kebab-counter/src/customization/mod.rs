//! # Customization Resolver
//!
//! Turns the raw option shapes of menu data into [`ResolvedOption`]s with a
//! normalized key and a price delta, and checks a [`Selection`] against the
//! item it was built for.
//!
//! ## Pricing an option
//!
//! The first of these that applies wins:
//! 1. the category's `priceModifier` entry for the option label (may be negative);
//! 2. a `price` written on the option object itself;
//! 3. the category's `extraCost`, for MULTIPLE categories only;
//! 4. zero.
//!
//! ## Malformed options
//!
//! [`try_resolve`] reports a malformed option as
//! [`CustomizationError::InvalidOptionFormat`]. [`resolve`] logs it and yields
//! [`ResolvedOption::unknown`] instead, so one bad entry never hides the rest
//! of its category.

pub mod customizer;
pub mod error;

pub use customizer::Customizer;
pub use error::CustomizationError;

use crate::model::{
    Choice, CustomizationCategory, MenuItem, Money, RawOption, ResolvedOption, Selection,
    SelectionMode,
};
use tracing::warn;

/// Lower-cases a label and joins its words with `-`: `"Extra Meat"` → `"extra-meat"`.
pub fn normalize_value(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolves one raw option of `category`.
pub fn try_resolve(
    category: &CustomizationCategory,
    raw: &RawOption,
) -> Result<ResolvedOption, CustomizationError> {
    let invalid = |detail: String| CustomizationError::InvalidOptionFormat {
        category: category.name.clone(),
        detail,
    };

    let (label, explicit_value, explicit_price) = match raw {
        RawOption::Label(label) => (label.trim(), None, None),
        RawOption::Detailed(spec) => (
            spec.label.trim(),
            spec.value.as_deref().map(str::trim).filter(|v| !v.is_empty()),
            spec.price,
        ),
        RawOption::Malformed(other) => return Err(invalid(other.to_string())),
    };
    if label.is_empty() {
        return Err(invalid("blank label".to_string()));
    }

    let value = explicit_value
        .map(str::to_string)
        .unwrap_or_else(|| normalize_value(label));
    let price = option_price(category, label, explicit_price);

    Ok(ResolvedOption::new(value, label, price))
}

fn option_price(category: &CustomizationCategory, label: &str, explicit: Option<Money>) -> Money {
    if let Some(delta) = category.price_modifier_by_option.get(label) {
        return *delta;
    }
    if let Some(price) = explicit {
        return price;
    }
    match (category.selection_mode, category.flat_extra_cost_per_selected_option) {
        (SelectionMode::Multiple, Some(flat)) => flat,
        _ => Money::ZERO,
    }
}

/// Like [`try_resolve`], but degrades a malformed option to the sentinel.
pub fn resolve(category: &CustomizationCategory, raw: &RawOption) -> ResolvedOption {
    try_resolve(category, raw).unwrap_or_else(|e| {
        warn!(category = %category.name, error = %e, "Malformed option replaced");
        ResolvedOption::unknown()
    })
}

/// Every option of `category`, in menu order, ready for display.
pub fn resolve_all(category: &CustomizationCategory) -> Vec<ResolvedOption> {
    category.options.iter().map(|raw| resolve(category, raw)).collect()
}

/// Finds the option whose value or label matches `key`.
///
/// `key` may be the stored value (`"extra-meat"`), the label (`"Extra Meat"`) or
/// anything that normalizes to the value. Malformed options never match.
pub fn find_option(category: &CustomizationCategory, key: &str) -> Option<ResolvedOption> {
    let wanted = normalize_value(key);
    category
        .options
        .iter()
        .filter_map(|raw| try_resolve(category, raw).ok())
        .find(|o| o.value == key || o.label == key || o.value == wanted)
}

/// Checks `selection` against `item`: categories and options must exist on the
/// item with the label and price the menu gives them, single-choice categories
/// hold at most one option, and required categories are not empty.
pub fn validate(item: &MenuItem, selection: &Selection) -> Result<(), CustomizationError> {
    for (name, choice) in selection.iter() {
        let category = item
            .category(name)
            .ok_or_else(|| CustomizationError::UnknownCategory {
                item: item.name.clone(),
                category: name.to_string(),
            })?;

        if category.selection_mode == SelectionMode::Single && choice.len() > 1 {
            return Err(CustomizationError::TooManySelections {
                category: name.to_string(),
                count: choice.len(),
            });
        }

        for option in choice.options() {
            let known = category
                .options
                .iter()
                .filter_map(|raw| try_resolve(category, raw).ok())
                .find(|o| o.value == option.value);
            match known {
                None => {
                    return Err(CustomizationError::UnknownOption {
                        category: name.to_string(),
                        option: option.label.clone(),
                    })
                }
                Some(known) if known != *option => {
                    warn!(category = %name, option = %option.value, "Option differs from menu");
                    return Err(CustomizationError::OptionMismatch {
                        category: name.to_string(),
                        option: option.label.clone(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    if let Some(missing) = item.required_categories().find(|c| !selection.has(&c.name)) {
        return Err(CustomizationError::MissingRequiredSelection {
            item: item.name.clone(),
            category: missing.name.clone(),
        });
    }
    Ok(())
}

/// Options grouped for display, e.g. `"Add-ons: Cheese, Extra Meat"`.
pub fn describe(selection: &Selection) -> Vec<String> {
    selection
        .iter()
        .map(|(name, choice)| {
            let labels: Vec<&str> = match choice {
                Choice::Single(option) => vec![option.label.as_str()],
                Choice::Multiple(set) => set.values().map(|o| o.label.as_str()).collect(),
            };
            format!("{}: {}", name, labels.join(", "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionSpec;
    use std::collections::BTreeMap;

    fn category(mode: SelectionMode, options: Vec<RawOption>) -> CustomizationCategory {
        CustomizationCategory {
            name: "Test".to_string(),
            selection_mode: mode,
            options,
            required: false,
            price_modifier_by_option: BTreeMap::new(),
            flat_extra_cost_per_selected_option: None,
        }
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn normalizes_labels() {
        assert_eq!(normalize_value("Extra Meat"), "extra-meat");
        assert_eq!(normalize_value("  No   Sauce "), "no-sauce");
        assert_eq!(normalize_value("Garlic"), "garlic");
    }

    #[test]
    fn bare_label_gets_default_value() {
        let cat = category(SelectionMode::Single, vec!["Stuffed Crust".into()]);
        let resolved = try_resolve(&cat, &cat.options[0]).unwrap();
        assert_eq!(resolved, ResolvedOption::new("stuffed-crust", "Stuffed Crust", Money::ZERO));
    }

    #[test]
    fn price_precedence() {
        let mut cat = category(
            SelectionMode::Multiple,
            vec![
                "Large".into(),
                RawOption::Detailed(OptionSpec {
                    label: "Olives".to_string(),
                    value: Some("olv".to_string()),
                    price: Some(money("0.75")),
                }),
                RawOption::Detailed(OptionSpec {
                    label: "Basil".to_string(),
                    value: None,
                    price: Some(money("0.25")),
                }),
                "Cheese".into(),
            ],
        );
        cat.price_modifier_by_option.insert("Large".to_string(), money("2"));
        cat.price_modifier_by_option.insert("Basil".to_string(), money("-0.5"));
        cat.flat_extra_cost_per_selected_option = Some(money("1.5"));

        let prices: Vec<Money> = resolve_all(&cat).into_iter().map(|o| o.price).collect();
        assert_eq!(prices, [money("2"), money("0.75"), money("-0.5"), money("1.5")]);
        assert_eq!(resolve_all(&cat)[1].value, "olv");
    }

    #[test]
    fn flat_cost_applies_only_to_multiple() {
        let mut cat = category(SelectionMode::Single, vec!["Garlic".into()]);
        cat.flat_extra_cost_per_selected_option = Some(money("1"));
        assert_eq!(resolve(&cat, &cat.options[0]).price, Money::ZERO);
    }

    #[test]
    fn malformed_option_degrades_to_sentinel() {
        let cat = category(
            SelectionMode::Single,
            vec![
                RawOption::Malformed(serde_json::json!(42)),
                "Chili".into(),
                RawOption::Label("   ".to_string()),
            ],
        );

        assert!(matches!(
            try_resolve(&cat, &cat.options[0]),
            Err(CustomizationError::InvalidOptionFormat { .. })
        ));
        let all = resolve_all(&cat);
        assert!(all[0].is_unknown());
        assert_eq!(all[1].value, "chili");
        assert!(all[2].is_unknown());
    }

    #[test]
    fn resolution_is_idempotent() {
        let cat = category(SelectionMode::Single, vec!["No Sauce".into()]);
        assert_eq!(resolve(&cat, &cat.options[0]), resolve(&cat, &cat.options[0]));
    }

    #[test]
    fn validate_rejects_options_priced_off_menu() {
        let mut cat = category(SelectionMode::Multiple, vec!["Cheese".into()]);
        cat.flat_extra_cost_per_selected_option = Some(money("1"));
        let item = MenuItem {
            id: crate::model::ItemId(1),
            name: "Wrap".to_string(),
            base_price: money("5"),
            customization_categories: vec![cat],
        };

        let mut honest = Selection::new();
        honest.toggle("Test", ResolvedOption::new("cheese", "Cheese", money("1")));
        assert_eq!(validate(&item, &honest), Ok(()));

        let mut free = Selection::new();
        free.toggle("Test", ResolvedOption::new("cheese", "Cheese", Money::ZERO));
        assert_eq!(
            validate(&item, &free),
            Err(CustomizationError::OptionMismatch {
                category: "Test".to_string(),
                option: "Cheese".to_string(),
            })
        );

        let mut relabeled = Selection::new();
        relabeled.toggle("Test", ResolvedOption::new("cheese", "Gold Leaf", money("1")));
        assert!(matches!(
            validate(&item, &relabeled),
            Err(CustomizationError::OptionMismatch { .. })
        ));
    }

    #[test]
    fn find_option_matches_value_label_or_loose_text() {
        let cat = category(SelectionMode::Single, vec!["No Sauce".into()]);
        for key in ["no-sauce", "No Sauce", "no sauce"] {
            assert_eq!(find_option(&cat, key).unwrap().label, "No Sauce");
        }
        assert!(find_option(&cat, "unknown").is_none());
    }
}
