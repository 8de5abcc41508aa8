//! Core value types.
//!
//! Everything here is a plain value or a pure function:
//! - Grid geometry (`Direction`, `Axis`, `BlockPos`, `Terrain`)
//! - The `BlockState` trait and the `GateState` it is implemented for
//! - Guard predicates over states

mod direction;
mod gate;
mod guard;
mod position;
mod state;

pub use direction::{Axis, Direction};
pub use gate::GateState;
pub use guard::Guard;
pub use position::{BlockPos, Terrain};
pub use state::{BlockState, PropertyDecl, PropertyError, BOOL_VALUES};
