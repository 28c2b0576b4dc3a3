//! Error types for corpus operations
//!
//! Every fallible engine call reports one of two kinds: the target is absent,
//! or the caller supplied a value the engine refuses to act on.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Classified engine failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Word, anagram group or page does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Caller-supplied value rejected before touching the corpus
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub(crate) fn word_not_found(word: &str) -> Self {
        Self::NotFound(format!("word '{word}'"))
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for the not-found kind (a 404 in HTTP terms)
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for the invalid-input kind (a 400 in HTTP terms)
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_target() {
        assert_eq!(
            EngineError::word_not_found("foo").to_string(),
            "word 'foo' not found"
        );
        assert_eq!(
            EngineError::invalid("page must be at least 1").to_string(),
            "invalid input: page must be at least 1"
        );
    }

    #[test]
    fn kind_predicates() {
        let not_found = EngineError::NotFound("page 3".to_string());
        assert!(not_found.is_not_found());
        assert!(!not_found.is_invalid_input());

        let invalid = EngineError::invalid("bad");
        assert!(invalid.is_invalid_input());
        assert!(!invalid.is_not_found());
    }
}
