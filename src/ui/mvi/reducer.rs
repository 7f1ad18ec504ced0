use super::intent::Intent;
use super::state::UiState;

/// Computes the next snapshot from the current one.
///
/// Derived flags are recomputed here and nowhere else, so any state a
/// reducer returns is internally consistent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
