use super::intent::Intent;
use super::state::UiState;

/// Pure state transition function.
///
/// Illegal transitions must return the input state unchanged rather than
/// panic, so callers can dispatch without checking preconditions first.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
