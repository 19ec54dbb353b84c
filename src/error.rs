//! Error types shared across the crate.
//!
//! Evaluation itself never fails. Errors come from building inputs (an empty
//! observation sequence, a malformed definition document) or from the optional
//! validation pass, which reports through [`ValidationError`].

use std::fmt;

use thiserror::Error;

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// The Forward Algorithm needs at least one observation
    #[error("observation sequence must contain at least one symbol")]
    EmptyObservationSequence,

    /// A `from->to->probability` entry could not be parsed
    #[error("invalid probability entry `{entry}`: {reason}")]
    InvalidEntry { entry: String, reason: String },

    /// Catch-all for structurally invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A model failed the optional validation pass
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A registered model failed validation inside a selector
    #[error("model #{index} failed validation: {source}")]
    InvalidModel {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("failed to read model definitions: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model definition document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_entry(entry: &str, reason: impl Into<String>) -> Self {
        Error::InvalidEntry {
            entry: entry.trim().to_string(),
            reason: reason.into(),
        }
    }
}

/// Which of a model's three probability tables a validation finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableKind {
    Initial,
    Transition,
    Emission,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Initial => "initial",
            TableKind::Transition => "transition",
            TableKind::Emission => "emission",
        };
        f.write_str(name)
    }
}

/// Data-quality problems found by [`HiddenMarkovModel::validate`].
///
/// These are kept apart from [`Error`]'s other variants because a model that
/// fails validation can still be evaluated; it simply yields meaningless
/// probabilities.
///
/// [`HiddenMarkovModel::validate`]: crate::hmm::HiddenMarkovModel::validate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("model declares no states")]
    NoStates,

    #[error("{table} probability {value} for `{key}` is outside [0, 1]")]
    OutOfRange {
        table: TableKind,
        key: String,
        value: f64,
    },

    #[error("{table} table references undeclared state `{state}`")]
    UndeclaredState { table: TableKind, state: String },

    #[error("initial probabilities sum to {sum}, expected 1")]
    InitialNotNormalized { sum: f64 },

    #[error("{table} probabilities from state `{state}` sum to {sum}, expected 1")]
    RowNotNormalized {
        table: TableKind,
        state: String,
        sum: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts_into_error() {
        let err: Error = ValidationError::InitialNotNormalized { sum: 0.5 }.into();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "initial probabilities sum to 0.5, expected 1");
    }

    #[test]
    fn test_invalid_entry_trims_entry_text() {
        let err = Error::invalid_entry("  A->B  ", "expected `from->to->probability`");
        assert_eq!(
            err.to_string(),
            "invalid probability entry `A->B`: expected `from->to->probability`"
        );
    }

    #[test]
    fn test_row_not_normalized_names_table_and_state() {
        let err = ValidationError::RowNotNormalized {
            table: TableKind::Emission,
            state: "Rain".to_string(),
            sum: 0.9,
        };
        assert_eq!(
            err.to_string(),
            "emission probabilities from state `Rain` sum to 0.9, expected 1"
        );
    }
}
