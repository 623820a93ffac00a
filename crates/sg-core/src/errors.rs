//! Error types for catalog lookups and decision tree traversal.
//!
//! Only [`GuideError::InvalidOption`] is recoverable during a traversal: the
//! caller re-prompts and the session cursor stays where it was. Everything
//! else either ends the session or is a data defect in the guide content.

use thiserror::Error;

/// Errors raised by the catalog and the decision tree engine.
#[derive(Debug, Error)]
pub enum GuideError {
    /// The answer key is not one of the current node's option keys.
    #[error("Invalid input. Please choose from: {}", valid.join(", "))]
    InvalidOption { key: String, valid: Vec<String> },

    /// A start key outside the eight top-level sections.
    #[error("Unknown section '{key}' (expected one of a-h)")]
    UnknownSection { key: String },

    /// A recommendation references a test id the catalog does not hold.
    #[error("Summary for '{id}' is not available in the catalog")]
    MissingCatalogEntry { id: String },

    /// Two catalog entries share one id.
    #[error("Duplicate catalog entry: {id}")]
    DuplicateCatalogEntry { id: String },

    /// The answer source has no more answers to give.
    #[error("input closed before the consultation finished")]
    InputClosed,

    /// Reading from the answer source failed.
    #[error("failed to read answer: {0}")]
    Input(#[from] std::io::Error),
}

impl GuideError {
    /// Whether the caller should re-prompt instead of ending the session.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidOption { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::GuideError;

    #[test]
    fn invalid_option_lists_valid_keys() {
        let error = GuideError::InvalidOption {
            key: "x".to_string(),
            valid: vec!["y".to_string(), "n".to_string()],
        };
        assert_eq!(error.to_string(), "Invalid input. Please choose from: y, n");
        assert!(error.is_recoverable());
    }

    #[test]
    fn unknown_section_is_fatal() {
        let error = GuideError::UnknownSection {
            key: "z".to_string(),
        };
        assert!(!error.is_recoverable());
        assert!(error.to_string().contains("'z'"));
    }
}
