use crate::ui::mvi::UiState;

/// Snapshot of the echo field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EchoState {
    /// Raw text as of the latest keystroke.
    pub input_text: String,
    /// Last published output; empty until a value has settled.
    pub output_text: String,
    /// Number of outputs published so far.
    pub published: u64,
}

impl UiState for EchoState {}
