//! Load-time binding of configured models to concrete gate states.
//!
//! A block resource maps selector tags such as `facing=east,open=true`
//! to model references. Binding parses every tag against the block's
//! identifier, picks the gate variant for the resulting state and records
//! the appearance state the renderer should be handed.
//!
//! Binding accumulates ALL bad entries rather than stopping at the first,
//! so a broken resource file is reported in one pass.

mod error;

pub use error::{BindError, BindFailure};

use crate::behavior::{BlockBehavior, ConfigError, FenceGate};
use crate::core::GateState;
use crate::selector::StateSelector;
use crate::variant::{try_variant_for, GateVariant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{info, warn};

/// Reference to a model asset with its rotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRef {
    pub model: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub uvlock: bool,
}

impl ModelRef {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            x: 0,
            y: 0,
            uvlock: false,
        }
    }
}

/// Visual resources declared for one block type, keyed by selector tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockResource {
    #[serde(default)]
    pub models: BTreeMap<String, ModelRef>,
}

impl BlockResource {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What a bound state renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateBinding {
    pub variant: GateVariant,
    /// The state handed to the appearance layer, with `powered` cleared.
    pub appearance: GateState,
    pub model: ModelRef,
}

/// Bound states of one block type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateBindings {
    entries: BTreeMap<GateState, StateBinding>,
}

impl StateBindings {
    pub fn get(&self, state: &GateState) -> Option<&StateBinding> {
        self.entries.get(state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GateState, &StateBinding)> {
        self.entries.iter()
    }
}

/// Bind every model in `resource`, accumulating all failures.
///
/// When two tags resolve to the same state the later tag, in key order,
/// wins.
pub fn bind(
    gate: &FenceGate,
    block_id: &str,
    resource: &BlockResource,
) -> Validation<StateBindings, NonEmptyVec<BindError>> {
    let default = gate.modify_default_state(GateState::default());

    let checks: Vec<Validation<(GateState, StateBinding), NonEmptyVec<BindError>>> = resource
        .models
        .iter()
        .map(|(tag, model)| bind_entry(gate, block_id, default, tag, model))
        .collect();

    Validation::all_vec(checks).map(|entries| {
        let bindings = StateBindings {
            entries: entries.into_iter().collect(),
        };
        info!(block = block_id, bound = bindings.len(), "gate models bound");
        bindings
    })
}

/// [`bind`] collapsed into a `Result` for callers that just want to fail.
pub fn bind_models(
    gate: &FenceGate,
    block_id: &str,
    resource: &BlockResource,
) -> Result<StateBindings, BindFailure> {
    match bind(gate, block_id, resource) {
        Validation::Success(bindings) => Ok(bindings),
        Validation::Failure(errors) => Err(BindFailure {
            errors: errors.iter().cloned().collect(),
        }),
    }
}

fn bind_entry(
    gate: &FenceGate,
    block_id: &str,
    default: GateState,
    tag: &str,
    model: &ModelRef,
) -> Validation<(GateState, StateBinding), NonEmptyVec<BindError>> {
    let selector = format!("{block_id}[{tag}]");

    let parsed = StateSelector::parse(&selector).and_then(|s| s.apply(block_id, default));
    let state = match parsed {
        Ok(state) => state,
        Err(source) => {
            warn!(selector = %selector, error = %source, "invalid block state in model map");
            return Validation::fail(BindError::InvalidSelector { selector, source });
        }
    };

    match try_variant_for(&state) {
        Ok(variant) => Validation::success((
            state,
            StateBinding {
                variant,
                appearance: gate.appearance_state(state),
                model: model.clone(),
            },
        )),
        Err(source) => {
            warn!(selector = %selector, error = %source, "no gate variant for block state");
            Validation::fail(BindError::NoVariant { selector, source })
        }
    }
}
