//! Selector parse and application errors.

use crate::core::PropertyError;
use thiserror::Error;

/// Errors that can occur parsing or applying a state selector.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Unexpected end of input at {offset}, expected {expected}")]
    UnexpectedEnd {
        expected: &'static str,
        offset: usize,
    },

    #[error("Unexpected '{found}' at {offset}, expected {expected}")]
    Unexpected {
        expected: &'static str,
        found: char,
        offset: usize,
    },

    #[error("Property '{field}' given more than once")]
    DuplicateProperty { field: String },

    #[error("Selector names '{found}' but the block is '{expected}'")]
    WrongBlock { expected: String, found: String },

    #[error(transparent)]
    Property(#[from] PropertyError),
}
