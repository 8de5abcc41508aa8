//! Hinge: a pure functional fence gate state machine
//!
//! Hinge decides how a bi-stable gate embedded in a tile grid reacts to
//! players, adjacent signal, explosions and neighboring walls, and which of
//! eight visual variants a state renders as.
//!
//! The host engine owns the world, persists states and schedules hooks.
//! Hinge only computes successor states and issues effects through the
//! capability the host passes into each call.
//!
//! # Core Concepts
//!
//! - **State**: `GateState`, the persisted per-tile value
//! - **Behavior**: `BlockBehavior` hooks, implemented by `FenceGate`
//! - **World**: `World`/`WorldView`, the injected host capability
//! - **Variant**: the visual variant for a state
//! - **Binding**: load-time mapping of configured models to states
//!
//! # Example
//!
//! ```rust
//! use hinge::behavior::{Actor, BlockBehavior, FenceGate, PlacementContext};
//! use hinge::core::{BlockPos, Direction, GateState};
//! use hinge::variant::{variant_for, GateVariant};
//! use hinge::world::{EntityId, GridWorld};
//!
//! let gate = FenceGate::default();
//! let mut world = GridWorld::new(1);
//! let pos = BlockPos::new(0, 64, 0);
//!
//! let placed = gate.state_for_placement(
//!     GateState::default(),
//!     &PlacementContext { world: &world, pos, horizontal_direction: Direction::North },
//! );
//! assert_eq!(variant_for(&placed), GateVariant::NorthSouthGate);
//!
//! let actor = Actor::new(EntityId(7), Direction::North);
//! let (opened, _) = gate.use_without_item(placed, &mut world, pos, &actor);
//! assert!(opened.open);
//! assert_eq!(world.sounds().len(), 1);
//! ```

pub mod behavior;
pub mod binding;
pub mod core;
pub mod selector;
pub mod variant;
pub mod world;

// Re-export commonly used types
pub use crate::behavior::{BlockBehavior, FenceGate, GateConfig};
pub use crate::core::{BlockState, Direction, GateState};
pub use crate::variant::{variant_for, GateVariant};
pub use crate::world::{World, WorldView};
