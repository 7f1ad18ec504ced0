//! Shared test utilities.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use echoform::reactive::{Subscription, Watch};
use tempfile::TempDir;

/// Every value a watched field publishes, in order.
pub struct Recorder<T> {
    values: Rc<RefCell<Vec<T>>>,
    _subscription: Subscription,
}

impl<T: Clone + PartialEq + 'static> Recorder<T> {
    pub fn new(watch: &Watch<T>) -> Self {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        let subscription = watch.subscribe(move |v: &T| sink.borrow_mut().push(v.clone()));
        Self {
            values,
            _subscription: subscription,
        }
    }

    pub fn values(&self) -> Vec<T> {
        self.values.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
