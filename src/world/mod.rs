//! Capability interfaces the behaviors call back into.
//!
//! The host world is external mutable state. Hooks receive it per call as
//! a trait object and never retain it.

mod grid;

pub use grid::{EmittedEvent, EmittedSound, GridWorld};

use crate::core::{BlockPos, BlockState, Terrain};
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// Identifier of an entity in the host world.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// How a state commit propagates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct UpdateFlags(u8);

impl UpdateFlags {
    /// Notify neighboring tiles.
    pub const NEIGHBORS: Self = Self(1);
    /// Send the change to observers.
    pub const CLIENTS: Self = Self(2);
    /// Re-render immediately on observers.
    pub const IMMEDIATE: Self = Self(8);
    /// What a plain "set and update" does.
    pub const DEFAULT: Self = Self(Self::NEIGHBORS.0 | Self::CLIENTS.0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for UpdateFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Category a sound is mixed under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCategory {
    Blocks,
}

/// World-level events observers can react to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    BlockOpen,
    BlockClose,
}

impl GameEvent {
    pub fn for_open(open: bool) -> Self {
        if open {
            Self::BlockOpen
        } else {
            Self::BlockClose
        }
    }
}

/// Read-only queries against the world.
pub trait WorldView {
    /// Whether any adjacent signal source is asserting at `pos`.
    fn has_neighbor_signal(&self, pos: BlockPos) -> bool;

    /// Classification of the tile at `pos`.
    fn terrain(&self, pos: BlockPos) -> Terrain;
}

/// Commands a behavior may issue against the world.
///
/// `S` is the state type stored for the calling block.
pub trait World<S: BlockState>: WorldView {
    /// Persist `state` at `pos` as one atomic write.
    fn set_block(&mut self, pos: BlockPos, state: S, flags: UpdateFlags);

    /// Play `sound` at `pos`. `source` is the entity that caused it, if any.
    fn play_sound(
        &mut self,
        source: Option<EntityId>,
        pos: BlockPos,
        sound: &str,
        category: SoundCategory,
        volume: f32,
        pitch: f32,
    );

    /// Emit a world event at `pos`.
    fn game_event(&mut self, source: Option<EntityId>, event: GameEvent, pos: BlockPos);

    /// Randomness owned by the world.
    fn rng(&mut self) -> &mut dyn rand::RngCore;
}
