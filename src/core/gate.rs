//! Persisted state of a fence gate.

use super::direction::{Axis, Direction};
use super::state::{bool_name, parse_bool, BlockState, PropertyDecl, PropertyError, BOOL_VALUES};
use serde::{Deserialize, Serialize};

const FACING_VALUES: &[&str] = &["north", "south", "west", "east"];

const GATE_FIELDS: &[PropertyDecl] = &[
    PropertyDecl::new("facing", FACING_VALUES),
    PropertyDecl::new("open", BOOL_VALUES),
    PropertyDecl::new("powered", BOOL_VALUES),
    PropertyDecl::new("in_wall", BOOL_VALUES),
];

/// State of one gate tile.
///
/// The host world owns and persists these values; the behavior only
/// computes successors. `powered` implies `open` after every signal-driven
/// transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GateState {
    pub facing: Direction,
    pub open: bool,
    pub powered: bool,
    pub in_wall: bool,
}

impl GateState {
    pub fn new(facing: Direction) -> Self {
        Self {
            facing,
            ..Self::default()
        }
    }

    pub fn axis(&self) -> Axis {
        self.facing.axis()
    }

    /// Axis on which neighbors decide `in_wall`.
    pub fn wall_axis(&self) -> Axis {
        self.facing.clockwise().axis()
    }

    pub fn with_open(self, open: bool) -> Self {
        Self { open, ..self }
    }

    pub fn with_powered(self, powered: bool) -> Self {
        Self { powered, ..self }
    }

    pub fn with_in_wall(self, in_wall: bool) -> Self {
        Self { in_wall, ..self }
    }

    pub fn with_facing(self, facing: Direction) -> Self {
        Self { facing, ..self }
    }

    /// `powered` never holds without `open`.
    pub fn is_consistent(&self) -> bool {
        !self.powered || self.open
    }

    /// Every state reachable through the declared field domains.
    pub fn all() -> impl Iterator<Item = GateState> {
        Direction::HORIZONTAL.into_iter().flat_map(|facing| {
            (0..8u8).map(move |bits| GateState {
                facing,
                open: bits & 1 != 0,
                powered: bits & 2 != 0,
                in_wall: bits & 4 != 0,
            })
        })
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self {
            facing: Direction::North,
            open: false,
            powered: false,
            in_wall: false,
        }
    }
}

impl BlockState for GateState {
    fn fields() -> &'static [PropertyDecl] {
        GATE_FIELDS
    }

    fn get(&self, field: &str) -> Option<&'static str> {
        match field {
            "facing" => Some(self.facing.name()),
            "open" => Some(bool_name(self.open)),
            "powered" => Some(bool_name(self.powered)),
            "in_wall" => Some(bool_name(self.in_wall)),
            _ => None,
        }
    }

    fn with(&self, field: &str, value: &str) -> Result<Self, PropertyError> {
        let state = *self;
        match field {
            "facing" => {
                let facing = Direction::from_name(value)
                    .filter(|d| d.axis().is_horizontal())
                    .ok_or_else(|| PropertyError::InvalidValue {
                        field: field.to_string(),
                        value: value.to_string(),
                    })?;
                Ok(state.with_facing(facing))
            }
            "open" => Ok(state.with_open(parse_bool(field, value)?)),
            "powered" => Ok(state.with_powered(parse_bool(field, value)?)),
            "in_wall" => Ok(state.with_in_wall(parse_bool(field, value)?)),
            _ => Err(PropertyError::UnknownField {
                field: field.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed_unpowered_north() {
        let state = GateState::default();
        assert_eq!(state.facing, Direction::North);
        assert!(!state.open && !state.powered && !state.in_wall);
        assert!(state.is_consistent());
    }

    #[test]
    fn wall_axis_is_perpendicular_to_facing() {
        assert_eq!(GateState::new(Direction::North).wall_axis(), Axis::X);
        assert_eq!(GateState::new(Direction::South).wall_axis(), Axis::X);
        assert_eq!(GateState::new(Direction::East).wall_axis(), Axis::Z);
        assert_eq!(GateState::new(Direction::West).wall_axis(), Axis::Z);
    }

    #[test]
    fn powered_without_open_is_inconsistent() {
        let state = GateState::default().with_powered(true);
        assert!(!state.is_consistent());
        assert!(state.with_open(true).is_consistent());
    }

    #[test]
    fn all_enumerates_every_combination() {
        let states: Vec<_> = GateState::all().collect();
        assert_eq!(states.len(), 32);
        let unique: std::collections::HashSet<_> = states.iter().collect();
        assert_eq!(unique.len(), 32);
    }

    #[test]
    fn describe_uses_declaration_order() {
        let state = GateState::new(Direction::East).with_open(true);
        assert_eq!(
            state.describe(),
            "facing=east,open=true,powered=false,in_wall=false"
        );
    }

    #[test]
    fn with_rejects_vertical_facing() {
        let err = GateState::default().with("facing", "up").unwrap_err();
        assert_eq!(
            err,
            PropertyError::InvalidValue {
                field: "facing".to_string(),
                value: "up".to_string()
            }
        );
    }

    #[test]
    fn with_sets_each_field() {
        let state = GateState::default()
            .with("facing", "west")
            .and_then(|s| s.with("open", "true"))
            .and_then(|s| s.with("in_wall", "true"))
            .unwrap();
        assert_eq!(
            state,
            GateState {
                facing: Direction::West,
                open: true,
                powered: false,
                in_wall: true,
            }
        );
    }

    #[test]
    fn state_serializes_correctly() {
        let state = GateState::new(Direction::South).with_open(true);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"facing\":\"south\""));
        let deserialized: GateState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
