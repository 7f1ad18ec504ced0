//! Single-threaded event loop driving both view-models.
//!
//! One task owns the models. It waits on whichever comes first: the next UI
//! event or the echo model's debounce deadline. Nothing here is `Send`; run
//! it on a current-thread runtime.

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::config::Config;
use crate::ui::echo::InputEchoModel;
use crate::ui::events::UiEvent;
use crate::ui::registration::RegistrationFormModel;

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A `Close` event arrived; pending work was discarded.
    Closed,
    /// The event source hung up; pending work was allowed to settle.
    InputEnded,
}

/// The models of one open screen.
pub struct Session {
    pub echo: InputEchoModel,
    pub form: RegistrationFormModel,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            echo: InputEchoModel::new(&config.echo),
            form: RegistrationFormModel::new(&config.registration),
        }
    }

    /// Apply one event. Returns `false` when the screen should close.
    pub fn handle(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::EchoInput(text) => self.echo.set_input(text),
            UiEvent::Name(name) => self.form.set_name(name),
            UiEvent::Email(email) => self.form.set_email(email),
            UiEvent::Password(password) => self.form.set_password(password),
            UiEvent::Gender(gender) => self.form.set_gender(gender),
            UiEvent::Reset => self.form.reset(),
            UiEvent::Submit => {
                // The button is disabled while the form is invalid.
                if !self.form.is_form_valid() {
                    tracing::debug!("submit ignored, form invalid");
                    return true;
                }
                if let Err(err) = self.form.submit() {
                    tracing::warn!(error = %err, "submit failed");
                }
            }
            UiEvent::Close => return false,
        }
        true
    }

    /// Process events until the screen closes or input ends.
    pub async fn run(&mut self, events: &mut mpsc::UnboundedReceiver<UiEvent>) -> StopReason {
        loop {
            let deadline = self.echo.next_deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if !self.handle(event) {
                            self.echo.cancel_pending();
                            tracing::debug!("session closed");
                            return StopReason::Closed;
                        }
                    }
                    None => {
                        self.drain().await;
                        tracing::debug!("input ended");
                        return StopReason::InputEnded;
                    }
                },
                _ = wait_for(deadline) => {
                    self.echo.poll(Instant::now());
                }
            }
        }
    }

    /// Let a pending echo evaluation reach its deadline and settle.
    async fn drain(&mut self) {
        while let Some(deadline) = self.echo.next_deadline() {
            sleep_until(deadline).await;
            self.echo.poll(Instant::now());
        }
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
