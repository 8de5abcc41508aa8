//! Binding errors.

use crate::selector::SelectorError;
use crate::variant::VariantError;
use thiserror::Error;

/// A configured model entry that could not be bound to a state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("Invalid block state '{selector}': {source}")]
    InvalidSelector {
        selector: String,
        source: SelectorError,
    },

    #[error("No variant for block state '{selector}': {source}")]
    NoVariant {
        selector: String,
        source: VariantError,
    },
}

/// Every entry that failed during one binding pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{} model entries failed to bind", .errors.len())]
pub struct BindFailure {
    pub errors: Vec<BindError>,
}
