mod common;

use std::time::Duration;

use common::Recorder;
use echoform::config::EchoConfig;
use echoform::ui::echo::InputEchoModel;
use tokio::time::Instant;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn model_at(t0: Instant) -> InputEchoModel {
    InputEchoModel::new_at(&EchoConfig::default(), t0)
}

/// A fresh model holds empty text and has the initial value pending.
#[test]
fn test_fresh_model_schedules_initial_value() {
    let t0 = Instant::now();
    let model = model_at(t0);
    assert_eq!(model.input_text(), "");
    assert_eq!(model.output_text(), "");
    assert!(model.is_pending());
    assert_eq!(model.next_deadline(), Some(t0 + ms(300)));
}

/// An untouched field settles to the bare prefix once the window passes.
#[test]
fn test_idle_model_publishes_bare_prefix() {
    let t0 = Instant::now();
    let mut model = model_at(t0);
    let outputs = Recorder::new(&model.output());

    assert_eq!(model.poll(t0 + ms(1000)).as_deref(), Some("You typed: "));
    assert_eq!(outputs.values(), vec!["You typed: ".to_string()]);
    assert_eq!(model.next_deadline(), None);
}

/// Typing an empty string after the initial settle is a duplicate.
#[test]
fn test_empty_input_after_initial_settle_is_deduplicated() {
    let t0 = Instant::now();
    let mut model = model_at(t0);
    model.poll(t0 + ms(1000));

    model.set_input_at("", t0 + ms(1000));
    assert_eq!(model.poll(t0 + ms(1300)), None);
    assert_eq!(model.state().published, 1);
}

/// Typing before the initial window closes replaces the initial value.
#[test]
fn test_early_keystroke_supersedes_initial_value() {
    let t0 = Instant::now();
    let mut model = model_at(t0);
    let outputs = Recorder::new(&model.output());

    model.set_input_at("a", t0 + ms(100));
    assert_eq!(model.poll(t0 + ms(300)), None);
    assert_eq!(model.poll(t0 + ms(400)).as_deref(), Some("You typed: a"));
    assert_eq!(outputs.values(), vec!["You typed: a".to_string()]);
}

/// Keystrokes inside one window collapse into a single publication.
#[test]
fn test_rapid_keystrokes_publish_once() {
    let t0 = Instant::now();
    let mut model = model_at(t0);
    let outputs = Recorder::new(&model.output());

    model.set_input_at("a", t0);
    model.set_input_at("ab", t0 + ms(100));
    model.set_input_at("abc", t0 + ms(250));

    // Windows of the superseded values have elapsed, the last one has not.
    assert_eq!(model.poll(t0 + ms(300)), None);
    assert_eq!(model.poll(t0 + ms(400)), None);
    assert!(outputs.values().is_empty());

    assert_eq!(model.poll(t0 + ms(550)).as_deref(), Some("You typed: abc"));
    assert_eq!(outputs.values(), vec!["You typed: abc".to_string()]);

    // Nothing left to fire.
    assert_eq!(model.poll(t0 + ms(10_000)), None);
    assert_eq!(outputs.len(), 1);
}

/// Settling on the published value again does not republish it.
#[test]
fn test_settling_on_same_value_twice_publishes_once() {
    let t0 = Instant::now();
    let mut model = model_at(t0);
    let outputs = Recorder::new(&model.output());

    model.set_input_at("abc", t0);
    model.poll(t0 + ms(300));

    // Edit away and back before the window closes; settles on "abc" again.
    model.set_input_at("abcd", t0 + ms(400));
    model.set_input_at("abc", t0 + ms(450));
    assert_eq!(model.poll(t0 + ms(750)), None);

    model.set_input_at("abc", t0 + ms(800));
    assert_eq!(model.poll(t0 + ms(1100)), None);

    assert_eq!(outputs.values(), vec!["You typed: abc".to_string()]);
    assert_eq!(model.state().published, 1);
}

/// Only the immediately preceding publication counts as a duplicate.
#[test]
fn test_dedup_compares_against_last_published_value() {
    let t0 = Instant::now();
    let mut model = model_at(t0);

    model.set_input_at("x", t0);
    model.poll(t0 + ms(300));
    model.set_input_at("y", t0 + ms(400));
    model.poll(t0 + ms(700));
    model.set_input_at("x", t0 + ms(800));

    assert_eq!(model.poll(t0 + ms(1100)).as_deref(), Some("You typed: x"));
    assert_eq!(model.state().published, 3);
}

/// Clearing the field after other text publishes the bare prefix.
#[test]
fn test_empty_input_settles_to_bare_prefix() {
    let t0 = Instant::now();
    let mut model = model_at(t0);

    model.set_input_at("a", t0);
    model.poll(t0 + ms(300));
    model.set_input_at("", t0 + ms(400));

    assert_eq!(model.poll(t0 + ms(700)).as_deref(), Some("You typed: "));
    assert_eq!(model.output_text(), "You typed: ");
}

/// The raw input observable fires on every keystroke.
#[test]
fn test_input_observable_sees_every_keystroke() {
    let t0 = Instant::now();
    let mut model = model_at(t0);
    let inputs = Recorder::new(&model.input());

    model.set_input_at("a", t0);
    model.set_input_at("ab", t0 + ms(10));
    model.set_input_at("a", t0 + ms(20));

    assert_eq!(inputs.values(), vec!["a", "ab", "a"]);
}

/// A configured debounce window replaces the 300 ms default.
#[test]
fn test_configured_window_is_respected() {
    let t0 = Instant::now();
    let config = EchoConfig {
        debounce_ms: 1000,
        ..EchoConfig::default()
    };
    let mut model = InputEchoModel::new_at(&config, t0);
    assert_eq!(model.next_deadline(), Some(t0 + ms(1000)));

    model.set_input_at("slow", t0);
    assert_eq!(model.poll(t0 + ms(999)), None);
    assert_eq!(model.poll(t0 + ms(1000)).as_deref(), Some("You typed: slow"));
}

/// Cancelling drops the pending value but keeps the raw input.
#[test]
fn test_cancel_pending_suppresses_output() {
    let t0 = Instant::now();
    let mut model = model_at(t0);
    model.set_input_at("gone", t0);

    assert!(model.cancel_pending());
    assert_eq!(model.poll(t0 + ms(300)), None);
    assert_eq!(model.output_text(), "");
    assert_eq!(model.input_text(), "gone");
}
