//! Grid positions and terrain classification.

use super::direction::Direction;
use serde::{Deserialize, Serialize};

/// Integer position of a tile in the world grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The adjacent position one step towards `direction`.
    pub fn relative(self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.offset();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    pub fn north(self) -> Self {
        self.relative(Direction::North)
    }

    pub fn south(self) -> Self {
        self.relative(Direction::South)
    }

    pub fn west(self) -> Self {
        self.relative(Direction::West)
    }

    pub fn east(self) -> Self {
        self.relative(Direction::East)
    }
}

/// Coarse classification of whatever occupies a tile.
///
/// The gate only distinguishes wall-like tiles from everything else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    Empty,
    Wall,
    Solid,
    Fence,
}

impl Terrain {
    pub fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}
