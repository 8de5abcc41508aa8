//! In-memory world that records every effect issued against it.

use super::{EntityId, GameEvent, SoundCategory, UpdateFlags, World, WorldView};
use crate::core::{BlockPos, GateState, Terrain};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

/// A sound played through [`World::play_sound`].
#[derive(Clone, Debug, PartialEq)]
pub struct EmittedSound {
    pub source: Option<EntityId>,
    pub pos: BlockPos,
    pub sound: String,
    pub category: SoundCategory,
    pub volume: f32,
    pub pitch: f32,
}

/// An event emitted through [`World::game_event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmittedEvent {
    pub source: Option<EntityId>,
    pub event: GameEvent,
    pub pos: BlockPos,
}

/// Sparse grid backed by hash maps.
///
/// Unset tiles are `Terrain::Empty` and carry no signal.
#[derive(Debug)]
pub struct GridWorld {
    terrain: HashMap<BlockPos, Terrain>,
    signals: HashSet<BlockPos>,
    gates: HashMap<BlockPos, GateState>,
    commits: Vec<(BlockPos, GateState, UpdateFlags)>,
    sounds: Vec<EmittedSound>,
    events: Vec<EmittedEvent>,
    rng: SmallRng,
}

impl GridWorld {
    pub fn new(seed: u64) -> Self {
        Self {
            terrain: HashMap::new(),
            signals: HashSet::new(),
            gates: HashMap::new(),
            commits: Vec::new(),
            sounds: Vec::new(),
            events: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn set_terrain(&mut self, pos: BlockPos, terrain: Terrain) {
        self.terrain.insert(pos, terrain);
    }

    /// Assert or release a signal at `pos`.
    pub fn set_signal(&mut self, pos: BlockPos, asserted: bool) {
        if asserted {
            self.signals.insert(pos);
        } else {
            self.signals.remove(&pos);
        }
    }

    pub fn gate_state(&self, pos: BlockPos) -> Option<GateState> {
        self.gates.get(&pos).copied()
    }

    /// Place a gate without going through a behavior hook.
    pub fn insert_gate(&mut self, pos: BlockPos, state: GateState) {
        self.gates.insert(pos, state);
    }

    pub fn commits(&self) -> &[(BlockPos, GateState, UpdateFlags)] {
        &self.commits
    }

    pub fn sounds(&self) -> &[EmittedSound] {
        &self.sounds
    }

    pub fn events(&self) -> &[EmittedEvent] {
        &self.events
    }

    /// Forget recorded effects, keeping the world contents.
    pub fn clear_effects(&mut self) {
        self.commits.clear();
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new(0)
    }
}

impl WorldView for GridWorld {
    fn has_neighbor_signal(&self, pos: BlockPos) -> bool {
        self.signals.contains(&pos)
    }

    fn terrain(&self, pos: BlockPos) -> Terrain {
        self.terrain.get(&pos).copied().unwrap_or_default()
    }
}

impl World<GateState> for GridWorld {
    fn set_block(&mut self, pos: BlockPos, state: GateState, flags: UpdateFlags) {
        self.gates.insert(pos, state);
        self.commits.push((pos, state, flags));
    }

    fn play_sound(
        &mut self,
        source: Option<EntityId>,
        pos: BlockPos,
        sound: &str,
        category: SoundCategory,
        volume: f32,
        pitch: f32,
    ) {
        self.sounds.push(EmittedSound {
            source,
            pos,
            sound: sound.to_string(),
            category,
            volume,
            pitch,
        });
    }

    fn game_event(&mut self, source: Option<EntityId>, event: GameEvent, pos: BlockPos) {
        self.events.push(EmittedEvent { source, event, pos });
    }

    fn rng(&mut self) -> &mut dyn rand::RngCore {
        &mut self.rng
    }
}
