use super::intent::Intent;
use super::state::ViewState;

/// Computes the next state from the current one and an intent.
///
/// Reducers are the only place state transitions happen and must be free
/// of side effects, so they can be tested without a runtime or backend.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
