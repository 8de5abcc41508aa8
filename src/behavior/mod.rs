//! Block behaviors: the hooks a host engine calls into.
//!
//! A behavior implements only the hooks it cares about. Every hook has a
//! default that leaves the state unchanged, so the host can dispatch
//! uniformly over all block types.

mod config;
mod fence_gate;

pub use config::{ConfigError, GateConfig, DEFAULT_CLOSE_SOUND, DEFAULT_OPEN_SOUND};
pub use fence_gate::FenceGate;

use crate::core::{BlockPos, BlockState, Direction, Terrain};
use crate::world::{EntityId, World, WorldView};
use serde::{Deserialize, Serialize};

/// The entity performing an interaction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Actor {
    pub id: EntityId,
    /// Horizontal direction the actor is looking in.
    pub facing: Direction,
}

impl Actor {
    pub fn new(id: EntityId, facing: Direction) -> Self {
        Self { id, facing }
    }
}

/// An explosive effect reaching a block.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Explosion {
    /// Wind-charge style effects can push interactive blocks; destructive
    /// blasts cannot.
    pub can_trigger_blocks: bool,
}

/// Everything known at the moment a block is placed.
pub struct PlacementContext<'a> {
    pub world: &'a dyn WorldView,
    pub pos: BlockPos,
    /// Horizontal direction the placer is facing.
    pub horizontal_direction: Direction,
}

/// Whether an interaction consumed the use action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InteractionResult {
    Success,
    Pass,
}

/// Kind of mob navigation asking whether a tile can be walked through.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PathKind {
    Land,
    Water,
    Air,
}

/// Hooks a host engine invokes on a block type.
pub trait BlockBehavior: Send + Sync {
    type State: BlockState;

    /// Adjust the host-built default state of the block type.
    fn modify_default_state(&self, state: Self::State) -> Self::State {
        state
    }

    /// State to commit when the block is placed.
    fn state_for_placement(
        &self,
        default: Self::State,
        _ctx: &PlacementContext<'_>,
    ) -> Self::State {
        default
    }

    /// Use with an empty hand.
    fn use_without_item(
        &self,
        state: Self::State,
        _world: &mut dyn World<Self::State>,
        _pos: BlockPos,
        _actor: &Actor,
    ) -> (Self::State, InteractionResult) {
        (state, InteractionResult::Pass)
    }

    /// A neighbor changed in a way that may affect incoming signal.
    fn neighbor_changed(
        &self,
        state: Self::State,
        _world: &mut dyn World<Self::State>,
        _pos: BlockPos,
    ) -> Self::State {
        state
    }

    fn on_explosion_hit(
        &self,
        state: Self::State,
        _world: &mut dyn World<Self::State>,
        _pos: BlockPos,
        _explosion: &Explosion,
    ) -> Self::State {
        state
    }

    /// The neighbor towards `direction` changed to `neighbor`. The host
    /// commits the returned state.
    fn update_shape(
        &self,
        state: Self::State,
        _world: &dyn WorldView,
        _pos: BlockPos,
        _direction: Direction,
        _neighbor: Terrain,
    ) -> Self::State {
        state
    }

    /// `None` defers to the host's own pathfinding rules.
    fn is_pathfindable(&self, _state: &Self::State, _kind: PathKind) -> Option<bool> {
        None
    }

    /// State exposed to the appearance layer in place of `state`.
    fn appearance_state(&self, state: Self::State) -> Self::State {
        state
    }
}
