//! Guard predicates over block states.
//!
//! Guards are pure boolean functions deciding whether a hook may act on
//! the current state. They carry no side effects.

use super::state::BlockState;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that determines if a transition may run.
///
/// # Example
///
/// ```rust
/// use hinge::core::{Direction, GateState, Guard};
///
/// let unpowered = Guard::new(|s: &GateState| !s.powered);
///
/// assert!(unpowered.check(&GateState::new(Direction::North)));
/// assert!(!unpowered.check(&GateState::new(Direction::North).with_open(true).with_powered(true)));
/// ```
pub struct Guard<S: BlockState> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: BlockState> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// A guard that always allows.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// A guard that never allows.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Check if the guard allows acting on this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// Both guards must allow.
    pub fn and(self, other: Guard<S>) -> Self
    where
        S: 'static,
    {
        Self::new(move |s| self.check(s) && other.check(s))
    }
}

impl<S: BlockState> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: BlockState> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, GateState};

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &GateState| s.open);

        assert!(guard.check(&GateState::default().with_open(true)));
        assert!(!guard.check(&GateState::default()));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = GateState::new(Direction::East);
        let guard = Guard::new(|s: &GateState| s.facing == Direction::East);

        assert_eq!(guard.check(&state), guard.check(&state));
    }

    #[test]
    fn and_requires_both() {
        let guard =
            Guard::new(|s: &GateState| s.open).and(Guard::new(|s: &GateState| !s.powered));

        assert!(guard.check(&GateState::default().with_open(true)));
        assert!(!guard.check(&GateState::default()));
        assert!(!guard.check(&GateState::default().with_open(true).with_powered(true)));
    }

    #[test]
    fn constant_guards() {
        let state = GateState::default();
        assert!(Guard::<GateState>::always().check(&state));
        assert!(!Guard::<GateState>::never().check(&state));
    }

    #[test]
    fn clones_share_predicate() {
        let guard = Guard::new(|s: &GateState| s.in_wall);
        let cloned = guard.clone();
        let state = GateState::default().with_in_wall(true);
        assert_eq!(guard.check(&state), cloned.check(&state));
    }
}
