//! Intents for the echo field.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoIntent {
    /// Keystroke: the text field now holds this value.
    SetInput(String),

    /// A settled, deduplicated value passed the pipeline; `output` is the
    /// fully formatted text to show.
    Publish { output: String },
}

impl Intent for EchoIntent {}
