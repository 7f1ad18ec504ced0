//! UI events and the stdin line reader that produces them.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::ui::registration::Gender;

/// Raw user events delivered to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The echo text field now holds this text.
    EchoInput(String),
    Name(String),
    Email(String),
    Password(String),
    Gender(Gender),
    /// Submit button pressed.
    Submit,
    /// Restore the form to its defaults.
    Reset,
    /// Screen closed; pending work is discarded.
    Close,
}

/// How stdin lines are turned into events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// Every line is a new snapshot of the echo field.
    Echo,
    /// `field=value` commands for the registration form.
    Form,
}

/// Parse one form command.
///
/// Accepted: `name=…`, `email=…`, `password=…`, `gender=male|female|other`,
/// `submit`, `reset`, `quit`. Anything else yields `None`.
pub fn parse_form_line(line: &str) -> Option<UiEvent> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    match trimmed.trim() {
        "submit" => return Some(UiEvent::Submit),
        "reset" => return Some(UiEvent::Reset),
        "quit" | "exit" => return Some(UiEvent::Close),
        _ => {}
    }

    let (key, value) = trimmed.split_once('=')?;
    let value = value.to_string();
    match key.trim() {
        "name" => Some(UiEvent::Name(value)),
        "email" => Some(UiEvent::Email(value)),
        "password" => Some(UiEvent::Password(value)),
        "gender" => value.parse().ok().map(UiEvent::Gender),
        _ => None,
    }
}

/// Read lines from `reader` until EOF, forwarding them as events.
///
/// Dropping the sender at EOF tells the event loop that input has ended.
pub async fn forward_lines<R>(reader: R, mode: LineMode, tx: mpsc::UnboundedSender<UiEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!(error = %err, "failed to read input line");
                break;
            }
        };

        let event = match mode {
            LineMode::Echo => UiEvent::EchoInput(line),
            LineMode::Form => match parse_form_line(&line) {
                Some(event) => event,
                None => {
                    tracing::warn!(line = %line, "ignoring unrecognized command");
                    continue;
                }
            },
        };
        if tx.send(event).is_err() {
            break;
        }
    }
}

/// Spawn a task feeding stdin lines into a new event channel.
pub fn stdin_events(mode: LineMode) -> mpsc::UnboundedReceiver<UiEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(forward_lines(BufReader::new(tokio::io::stdin()), mode, tx));
    rx
}
