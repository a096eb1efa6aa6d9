//! Error types for chainrule.
//!
//! All errors are strongly typed using thiserror so hosts can pattern match
//! on specific failure conditions. Unresolved sub-goals during backward
//! chaining are deliberately not errors: they are collected on the proof
//! result instead.

use thiserror::Error;

/// Errors raised while parsing or validating a rule before it enters the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Rule text cannot be empty")]
    EmptyRule,

    #[error("Malformed rule: {reason}")]
    MalformedRule {
        reason: String,
    },

    #[error("Rule must have at least one premise")]
    EmptyPremises,

    #[error("Rule conclusion cannot be empty")]
    EmptyConclusion,

    #[error("Unknown feature '{token}' is not a recognized premise")]
    UnknownFeature {
        token: String,
    },
}

/// Errors raised when addressing a rule by position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Rule store is empty")]
    EmptyStore,

    #[error("Rule index {index} is out of range (store has {len} rules)")]
    OutOfRange {
        index: usize,
        len: usize,
    },
}

/// Errors raised when a reasoning run cannot start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReasoningError {
    #[error("Forward chaining requires at least one initial fact")]
    NoInitialFacts,
}

/// Top-level error type for chainrule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Reasoning error: {0}")]
    Reasoning(#[from] ReasoningError),
}

impl ChainError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an index error.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Returns true if this is a reasoning error.
    #[must_use]
    pub const fn is_reasoning(&self) -> bool {
        matches!(self, Self::Reasoning(_))
    }
}

/// Result type alias for chainrule operations.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_feature_names_token() {
        let err = ValidationError::UnknownFeature {
            token: "会说话".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("会说话"));
        assert!(msg.contains("Unknown feature"));
    }

    #[test]
    fn test_malformed_rule_reason() {
        let err = ValidationError::MalformedRule {
            reason: "missing separator".to_string(),
        };
        assert!(format!("{err}").contains("missing separator"));
    }

    #[test]
    fn test_index_error_out_of_range() {
        let err = IndexError::OutOfRange { index: 20, len: 15 };
        let msg = format!("{err}");
        assert!(msg.contains("20"));
        assert!(msg.contains("15"));
    }

    #[test]
    fn test_chain_error_from_validation() {
        let err: ChainError = ValidationError::EmptyPremises.into();
        assert!(err.is_validation());
        assert!(!err.is_index());
        assert!(!err.is_reasoning());
    }

    #[test]
    fn test_chain_error_from_index() {
        let err: ChainError = IndexError::EmptyStore.into();
        assert!(err.is_index());
        assert!(format!("{err}").contains("empty"));
    }

    #[test]
    fn test_chain_error_from_reasoning() {
        let err: ChainError = ReasoningError::NoInitialFacts.into();
        assert!(err.is_reasoning());
        assert!(format!("{err}").contains("initial fact"));
    }
}
