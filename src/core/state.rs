//! The `BlockState` trait for persisted per-tile state.
//!
//! Host engines store block state in a generic layer that knows nothing
//! about individual fixture types. That layer only needs the declared
//! fields and a way to read and write them as strings, which is what this
//! trait provides.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Declaration of one state field and its closed value domain.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PropertyDecl {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl PropertyDecl {
    pub const fn new(name: &'static str, values: &'static [&'static str]) -> Self {
        Self { name, values }
    }
}

/// Boolean domain shared by flag fields.
pub const BOOL_VALUES: &[&str] = &["true", "false"];

/// Errors raised when addressing a state field by name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Unknown property '{field}'")]
    UnknownField { field: String },

    #[error("Value '{value}' is not valid for property '{field}'")]
    InvalidValue { field: String, value: String },
}

/// Trait for persisted block states.
///
/// All methods are pure. `with` returns a new value and leaves `self`
/// untouched.
pub trait BlockState:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Declared fields, in declaration order.
    fn fields() -> &'static [PropertyDecl];

    /// Current value of `field`, or `None` if the field is not declared.
    fn get(&self, field: &str) -> Option<&'static str>;

    /// Copy of this state with `field` set to `value`.
    fn with(&self, field: &str, value: &str) -> Result<Self, PropertyError>;

    /// Look up a declaration by field name.
    fn field(name: &str) -> Option<&'static PropertyDecl> {
        Self::fields().iter().find(|decl| decl.name == name)
    }

    /// Render as the comma separated `field=value` list used inside
    /// selector brackets.
    fn describe(&self) -> String {
        Self::fields()
            .iter()
            .filter_map(|decl| self.get(decl.name).map(|v| format!("{}={}", decl.name, v)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub(crate) fn parse_bool(field: &str, value: &str) -> Result<bool, PropertyError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(PropertyError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

pub(crate) fn bool_name(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
