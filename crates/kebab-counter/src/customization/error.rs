//! Error types for option resolution and selection checks.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomizationError {
    /// A menu option is neither a label nor an object with a label.
    #[error("Invalid option in '{category}': {detail}")]
    InvalidOptionFormat { category: String, detail: String },

    /// A required category has nothing chosen.
    #[error("'{item}' needs a choice for '{category}'")]
    MissingRequiredSelection { item: String, category: String },

    #[error("'{item}' has no customization named '{category}'")]
    UnknownCategory { item: String, category: String },

    #[error("'{category}' has no option '{option}'")]
    UnknownOption { category: String, option: String },

    /// The option exists, but its label or price differs from the menu.
    #[error("'{option}' in '{category}' does not match the menu")]
    OptionMismatch { category: String, option: String },

    /// More than one option in a single-choice category.
    #[error("'{category}' allows one choice, got {count}")]
    TooManySelections { category: String, count: usize },
}
