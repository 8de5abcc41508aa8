//! Mapping from gate state to the visual variant observers see.

use crate::core::{Axis, GateState};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors selecting a variant.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum VariantError {
    #[error("Only horizontal axes are supported, got {0:?}")]
    VerticalAxis(Axis),
}

/// The eight gate models a renderer can show.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateVariant {
    NorthSouthGate,
    NorthSouthOpenGate,
    NorthSouthInWallGate,
    NorthSouthInWallOpenGate,
    EastWestGate,
    EastWestOpenGate,
    EastWestInWallGate,
    EastWestInWallOpenGate,
}

impl GateVariant {
    pub const ALL: [GateVariant; 8] = [
        Self::NorthSouthGate,
        Self::NorthSouthOpenGate,
        Self::NorthSouthInWallGate,
        Self::NorthSouthInWallOpenGate,
        Self::EastWestGate,
        Self::EastWestOpenGate,
        Self::EastWestInWallGate,
        Self::EastWestInWallOpenGate,
    ];

    /// Select from the three inputs that affect appearance.
    pub fn select(open: bool, in_wall: bool, axis: Axis) -> Result<Self, VariantError> {
        let variant = match (axis, in_wall, open) {
            (Axis::Z, false, false) => Self::NorthSouthGate,
            (Axis::Z, false, true) => Self::NorthSouthOpenGate,
            (Axis::Z, true, false) => Self::NorthSouthInWallGate,
            (Axis::Z, true, true) => Self::NorthSouthInWallOpenGate,
            (Axis::X, false, false) => Self::EastWestGate,
            (Axis::X, false, true) => Self::EastWestOpenGate,
            (Axis::X, true, false) => Self::EastWestInWallGate,
            (Axis::X, true, true) => Self::EastWestInWallOpenGate,
            (Axis::Y, _, _) => return Err(VariantError::VerticalAxis(axis)),
        };
        Ok(variant)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::NorthSouthGate => "north_south_gate",
            Self::NorthSouthOpenGate => "north_south_open_gate",
            Self::NorthSouthInWallGate => "north_south_inwall_gate",
            Self::NorthSouthInWallOpenGate => "north_south_inwall_open_gate",
            Self::EastWestGate => "east_west_gate",
            Self::EastWestOpenGate => "east_west_open_gate",
            Self::EastWestInWallGate => "east_west_inwall_gate",
            Self::EastWestInWallOpenGate => "east_west_inwall_open_gate",
        }
    }

    pub fn is_open(self) -> bool {
        matches!(
            self,
            Self::NorthSouthOpenGate
                | Self::NorthSouthInWallOpenGate
                | Self::EastWestOpenGate
                | Self::EastWestInWallOpenGate
        )
    }
}

impl fmt::Display for GateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Variant for `state`, or an error if its facing is vertical.
pub fn try_variant_for(state: &GateState) -> Result<GateVariant, VariantError> {
    GateVariant::select(state.open, state.in_wall, state.axis())
}

/// Variant for `state`.
///
/// # Panics
///
/// Panics if `state.facing` is vertical. Gates are only defined for
/// horizontal placement.
pub fn variant_for(state: &GateState) -> GateVariant {
    match try_variant_for(state) {
        Ok(variant) => variant,
        Err(err) => panic!("{err}"),
    }
}
