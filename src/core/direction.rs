//! Grid directions and axes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three grid axes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn is_horizontal(self) -> bool {
        !matches!(self, Self::Y)
    }
}

/// A unit step on the grid.
///
/// Only the four horizontal directions are valid gate facings; `Up` and
/// `Down` exist because neighbor updates arrive from every side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const HORIZONTAL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub const ALL: [Direction; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Rotate a quarter turn clockwise around the vertical axis.
    ///
    /// # Panics
    ///
    /// Panics for `Up` and `Down`, which have no horizontal rotation.
    pub fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::Up | Self::Down => panic!("Unable to get clockwise direction of {self}"),
        }
    }

    /// Unit offset as `(dx, dy, dz)`. North is `-z`, east is `+x`.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().axis(), dir.axis());
        }
    }

    #[test]
    fn clockwise_switches_horizontal_axis() {
        for dir in Direction::HORIZONTAL {
            assert_ne!(dir.clockwise().axis(), dir.axis());
            assert!(dir.clockwise().axis().is_horizontal());
        }
        assert_eq!(Direction::North.clockwise(), Direction::East);
        assert_eq!(Direction::West.clockwise(), Direction::North);
    }

    #[test]
    #[should_panic(expected = "clockwise")]
    fn clockwise_of_vertical_panics() {
        let _ = Direction::Up.clockwise();
    }

    #[test]
    fn names_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_name(dir.name()), Some(dir));
        }
        assert_eq!(Direction::from_name("northwest"), None);
    }
}
