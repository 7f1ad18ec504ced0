//! View-model for the debounced echo field.

use tokio::time::Instant;

use crate::config::EchoConfig;
use crate::reactive::{Debouncer, Observable, RemoveDuplicates, Watch};
use crate::ui::mvi::Store;

use super::intent::EchoIntent;
use super::reducer::EchoReducer;
use super::state::EchoState;

/// Text field whose output trails the input by a quiet period.
///
/// ```text
/// set_input ──→ debounce(window) ──→ remove duplicates ──→ prefix + value ──→ output
/// ```
///
/// The model never sleeps. The owning event loop asks for
/// [`next_deadline`](Self::next_deadline) and calls [`poll`](Self::poll)
/// once it has passed.
///
/// The initial empty input goes through the same pipeline: an untouched
/// field settles to the bare prefix one window after construction.
pub struct InputEchoModel {
    store: Store<EchoReducer>,
    debouncer: Debouncer<String>,
    dedup: RemoveDuplicates<String>,
    prefix: String,
    input: Observable<String>,
    output: Observable<String>,
}

impl Default for InputEchoModel {
    fn default() -> Self {
        Self::new(&EchoConfig::default())
    }
}

impl InputEchoModel {
    pub fn new(config: &EchoConfig) -> Self {
        Self::new_at(config, Instant::now())
    }

    /// [`new`](Self::new) with an explicit clock reading for the initial
    /// evaluation.
    pub fn new_at(config: &EchoConfig, now: Instant) -> Self {
        let mut debouncer = Debouncer::new(config.debounce());
        let store: Store<EchoReducer> = Store::default();
        debouncer.schedule(store.state().input_text.clone(), now);
        Self {
            store,
            debouncer,
            dedup: RemoveDuplicates::new(),
            prefix: config.prefix.clone(),
            input: Observable::default(),
            output: Observable::default(),
        }
    }

    /// Record a keystroke and restart the debounce window.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.set_input_at(text, Instant::now());
    }

    /// [`set_input`](Self::set_input) with an explicit clock reading.
    pub fn set_input_at(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.store.dispatch(EchoIntent::SetInput(text.clone()));
        self.input.set(text.clone());

        let superseded = self.debouncer.schedule(text, now);
        tracing::trace!(superseded, "echo evaluation scheduled");
    }

    /// Settle the pending value if its window has elapsed at `now`.
    ///
    /// Returns the newly published output, or `None` when nothing was due or
    /// the settled value repeats the last published one.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let settled = self.debouncer.poll(now)?;
        let Some(value) = self.dedup.filter(settled) else {
            tracing::debug!("settled value matches last output, skipped");
            return None;
        };

        let output = format!("{}{}", self.prefix, value);
        self.store.dispatch(EchoIntent::Publish {
            output: output.clone(),
        });
        self.output.set(output.clone());
        tracing::debug!(output = %output, "echo output published");
        Some(output)
    }

    /// When the pending evaluation becomes due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Drop the pending evaluation, if any, without publishing it.
    pub fn cancel_pending(&mut self) -> bool {
        self.debouncer.cancel()
    }

    /// Tear the model down; a pending evaluation is discarded.
    pub fn close(mut self) {
        if self.cancel_pending() {
            tracing::debug!("echo model closed with a pending evaluation");
        }
    }

    pub fn state(&self) -> &EchoState {
        self.store.state()
    }

    pub fn input_text(&self) -> &str {
        &self.store.state().input_text
    }

    pub fn output_text(&self) -> &str {
        &self.store.state().output_text
    }

    pub fn input(&self) -> Watch<String> {
        self.input.watch()
    }

    pub fn output(&self) -> Watch<String> {
        self.output.watch()
    }
}
