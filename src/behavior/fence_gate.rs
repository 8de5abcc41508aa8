//! Fence gate behavior.

use super::{
    Actor, BlockBehavior, Explosion, GateConfig, InteractionResult, PathKind, PlacementContext,
};
use crate::core::{BlockPos, Direction, GateState, Guard, Terrain};
use crate::world::{EntityId, GameEvent, SoundCategory, UpdateFlags, World, WorldView};
use rand::Rng;
use tracing::{debug, trace};

/// A bi-stable gate that opens on use, follows incoming signal and can be
/// blown open or shut.
#[derive(Clone, Debug)]
pub struct FenceGate {
    config: GateConfig,
    explosion_guard: Guard<GateState>,
}

impl FenceGate {
    pub fn new(config: GateConfig) -> Self {
        let allowed = config.can_open_by_wind_charge;
        Self {
            config,
            explosion_guard: Guard::new(move |s: &GateState| allowed && !s.powered),
        }
    }

    fn is_wall(terrain: Terrain) -> bool {
        terrain.is_wall()
    }

    fn play_sound(
        &self,
        world: &mut dyn World<GateState>,
        source: Option<EntityId>,
        pos: BlockPos,
        open: bool,
    ) {
        let pitch = world.rng().random::<f32>() * 0.1 + 0.9;
        world.play_sound(
            source,
            pos,
            self.config.sound_for(open),
            SoundCategory::Blocks,
            1.0,
            pitch,
        );
        world.game_event(source, GameEvent::for_open(open), pos);
    }

    fn toggle(
        &self,
        state: GateState,
        world: &mut dyn World<GateState>,
        pos: BlockPos,
    ) -> GateState {
        let next = state.with_open(!state.open);
        world.set_block(pos, next, UpdateFlags::DEFAULT);
        debug!(?pos, open = next.open, "gate toggled");
        self.play_sound(world, None, pos, next.open);
        next
    }
}

impl Default for FenceGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

impl BlockBehavior for FenceGate {
    type State = GateState;

    fn modify_default_state(&self, state: GateState) -> GateState {
        state.with_open(false).with_powered(false).with_in_wall(false)
    }

    fn state_for_placement(&self, default: GateState, ctx: &PlacementContext<'_>) -> GateState {
        let powered = ctx.world.has_neighbor_signal(ctx.pos);
        let facing = ctx.horizontal_direction;
        let side = facing.clockwise();
        let in_wall = Self::is_wall(ctx.world.terrain(ctx.pos.relative(side)))
            || Self::is_wall(ctx.world.terrain(ctx.pos.relative(side.opposite())));

        self.modify_default_state(default)
            .with_facing(facing)
            .with_open(powered)
            .with_powered(powered)
            .with_in_wall(in_wall)
    }

    fn use_without_item(
        &self,
        state: GateState,
        world: &mut dyn World<GateState>,
        pos: BlockPos,
        actor: &Actor,
    ) -> (GateState, InteractionResult) {
        let next = if state.open {
            state.with_open(false)
        } else {
            let facing = if state.facing == actor.facing.opposite() {
                actor.facing
            } else {
                state.facing
            };
            state.with_facing(facing).with_open(true)
        };
        world.set_block(pos, next, UpdateFlags::CLIENTS | UpdateFlags::IMMEDIATE);
        debug!(?pos, actor = actor.id.0, open = next.open, facing = %next.facing, "gate used");

        self.play_sound(world, Some(actor.id), pos, next.open);
        (next, InteractionResult::Success)
    }

    fn neighbor_changed(
        &self,
        state: GateState,
        world: &mut dyn World<GateState>,
        pos: BlockPos,
    ) -> GateState {
        let signal = world.has_neighbor_signal(pos);
        if state.powered == signal {
            trace!(?pos, signal, "gate signal unchanged");
            return state;
        }

        let next = state.with_powered(signal).with_open(signal);
        world.set_block(pos, next, UpdateFlags::CLIENTS);
        debug!(?pos, powered = signal, "gate signal changed");

        if state.open != signal {
            self.play_sound(world, None, pos, signal);
        }
        next
    }

    fn on_explosion_hit(
        &self,
        state: GateState,
        world: &mut dyn World<GateState>,
        pos: BlockPos,
        explosion: &Explosion,
    ) -> GateState {
        if explosion.can_trigger_blocks && self.explosion_guard.check(&state) {
            self.toggle(state, world, pos)
        } else {
            trace!(?pos, powered = state.powered, "explosion ignored by gate");
            state
        }
    }

    fn update_shape(
        &self,
        state: GateState,
        world: &dyn WorldView,
        pos: BlockPos,
        direction: Direction,
        neighbor: Terrain,
    ) -> GateState {
        if state.wall_axis() != direction.axis() {
            trace!(?pos, %direction, "shape update off the wall axis");
            return state;
        }
        let opposite = world.terrain(pos.relative(direction.opposite()));
        let in_wall = Self::is_wall(neighbor) || Self::is_wall(opposite);
        state.with_in_wall(in_wall)
    }

    fn is_pathfindable(&self, state: &GateState, kind: PathKind) -> Option<bool> {
        match kind {
            PathKind::Land | PathKind::Air => Some(state.open),
            PathKind::Water => Some(false),
        }
    }

    /// Rendering never sees `powered`; it only latches signal state.
    fn appearance_state(&self, state: GateState) -> GateState {
        state.with_powered(false)
    }
}
