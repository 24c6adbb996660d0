//! Pure state transitions for screens.

use super::intent::Intent;
use super::state::UiState;

/// Transforms screen state based on intents: `(State, Intent) -> State`.
///
/// Reducers never call into `ItemStore`; they only see the outcome.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply a sequence of intents in order.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
