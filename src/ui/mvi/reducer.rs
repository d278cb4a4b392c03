//! Reducer trait for screen state machines.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms screen state based on intents.
///
/// The reducer is the only place where screen state changes. It never talks
/// to the network: controllers await backend calls and feed the outcome in
/// as an intent.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
