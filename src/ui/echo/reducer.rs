use crate::ui::mvi::Reducer;

use super::intent::EchoIntent;
use super::state::EchoState;

/// Reducer for the echo field.
///
/// Timing and deduplication live in the model; by the time `Publish`
/// reaches the reducer the value is final.
pub struct EchoReducer;

impl Reducer for EchoReducer {
    type State = EchoState;
    type Intent = EchoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EchoIntent::SetInput(input_text) => EchoState {
                input_text,
                ..state
            },
            EchoIntent::Publish { output } => EchoState {
                output_text: output,
                published: state.published + 1,
                ..state
            },
        }
    }
}
