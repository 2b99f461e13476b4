//! Unified error handling for feedchain.
//!
//! Dispatch itself never fails: an unmatched request is a valid outcome.
//! The errors here cover chain construction and response templates.

use thiserror::Error;

// ============================================================================
// Template Errors
// ============================================================================

/// Errors raised while parsing a response template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),

    #[error("unclosed '{{' at byte {0}")]
    Unclosed(usize),

    #[error("unmatched '}}' at byte {0}")]
    StrayClose(usize),
}

// ============================================================================
// Chain Errors (construction)
// ============================================================================

/// Errors that can occur while linking or building a chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Linking `successor` after `handler` would make `handler` reachable
    /// from itself.
    #[error("linking {successor} after {handler} would create a cycle")]
    Cycle { handler: String, successor: String },

    #[error("unknown handler kind: {0}")]
    UnknownKind(String),

    #[error("handler entry needs {0}")]
    MissingField(&'static str),

    #[error("chain has no handlers")]
    EmptyChain,

    #[error("no handler named {0} in chain")]
    UnknownEntry(String),

    #[error("invalid response template: {0}")]
    Template(#[from] TemplateError),
}

impl ChainError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Cycle { .. } => "cycle",
            Self::UnknownKind(_) => "unknown_kind",
            Self::MissingField(_) => "missing_field",
            Self::EmptyChain => "empty_chain",
            Self::UnknownEntry(_) => "unknown_entry",
            Self::Template(_) => "template",
        }
    }
}

/// Result type for chain construction.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let cycle = ChainError::Cycle {
            handler: "Dog".into(),
            successor: "Monkey".into(),
        };
        assert_eq!(cycle.error_code(), "cycle");
        assert_eq!(ChainError::EmptyChain.error_code(), "empty_chain");
        assert_eq!(
            ChainError::from(TemplateError::Unclosed(3)).error_code(),
            "template"
        );
    }

    #[test]
    fn test_display() {
        let err = ChainError::Cycle {
            handler: "Dog".into(),
            successor: "Monkey".into(),
        };
        assert_eq!(
            err.to_string(),
            "linking Monkey after Dog would create a cycle"
        );
        assert_eq!(
            TemplateError::UnknownPlaceholder("who".into()).to_string(),
            "unknown placeholder {who}"
        );
    }
}
