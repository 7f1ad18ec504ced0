//! Shared observable values with ordered change notification.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Slot<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    /// Values waiting to be delivered while a dispatch is running.
    queue: VecDeque<T>,
    dispatching: bool,
}

/// A single-threaded value cell that notifies subscribers when it changes.
///
/// Cloning an `Observable` yields another handle to the same cell. Writes
/// that leave the value unchanged are ignored: no version bump and no
/// callbacks.
///
/// Notifications are delivered in the order the changes were produced. A
/// callback that writes back into the same observable does not recurse;
/// the new value is queued and delivered after the current round.
pub struct Observable<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Observable")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .field("subscribers", &slot.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
                queue: VecDeque::new(),
                dispatching: false,
            })),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.slot.borrow().value.clone()
    }

    /// Number of changes applied since creation.
    pub fn version(&self) -> u64 {
        self.slot.borrow().version
    }

    /// Replace the value and notify subscribers if it changed.
    ///
    /// Returns `true` when the value changed.
    pub fn set(&self, value: T) -> bool {
        if !self.commit(value) {
            return false;
        }
        self.publish();
        true
    }

    /// Replace the value now but hold its notification in `batch`.
    ///
    /// Readers see the new value immediately; subscribers hear about it when
    /// the batch flushes.
    pub fn stage(&self, value: T, batch: &mut Batch) -> bool {
        if !self.commit(value) {
            return false;
        }
        let this = self.clone();
        batch.defer(move || this.publish());
        true
    }

    /// Register a callback invoked with every new value.
    ///
    /// The callback stays registered until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut slot = self.slot.borrow_mut();
            let id = slot.next_id;
            slot.next_id += 1;
            slot.subscribers.push((id, Rc::new(callback)));
            id
        };

        let weak: Weak<RefCell<Slot<T>>> = Rc::downgrade(&self.slot);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(slot) = weak.upgrade() {
                    slot.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slot.borrow().subscribers.len()
    }

    /// Read-only handle sharing this cell.
    pub fn watch(&self) -> Watch<T> {
        Watch {
            inner: self.clone(),
        }
    }

    fn commit(&self, value: T) -> bool {
        let mut slot = self.slot.borrow_mut();
        if slot.value == value {
            return false;
        }
        slot.value = value;
        slot.version += 1;
        true
    }

    fn publish(&self) {
        {
            let mut slot = self.slot.borrow_mut();
            let value = slot.value.clone();
            slot.queue.push_back(value);
            if slot.dispatching {
                return;
            }
            slot.dispatching = true;
        }

        loop {
            let (value, callbacks) = {
                let mut slot = self.slot.borrow_mut();
                match slot.queue.pop_front() {
                    Some(value) => {
                        let callbacks: Vec<Callback<T>> =
                            slot.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect();
                        (value, callbacks)
                    }
                    None => {
                        slot.dispatching = false;
                        return;
                    }
                }
            };
            for callback in callbacks {
                callback(&value);
            }
        }
    }
}

/// Read-only view of an [`Observable`].
///
/// Handed to the presentation layer so it can read and subscribe to a field
/// without being able to write derived state.
pub struct Watch<T> {
    inner: Observable<T>,
}

impl<T> Clone for Watch<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Watch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T: Clone + PartialEq + 'static> Watch<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.inner.subscribe(callback)
    }
}

/// RAII guard for a subscription; dropping it unregisters the callback.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keep the callback registered for the lifetime of the observable.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Deferred notifications for a group of staged writes.
///
/// Every staged value is visible as soon as it is staged; notifications run
/// in staging order on [`Batch::flush`] or when the batch is dropped.
#[derive(Default)]
pub struct Batch {
    pending: Vec<Box<dyn FnOnce()>>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Deliver all held notifications in order.
    pub fn flush(mut self) {
        self.run();
    }

    fn defer(&mut self, notify: impl FnOnce() + 'static) {
        self.pending.push(Box::new(notify));
    }

    fn run(&mut self) {
        for notify in std::mem::take(&mut self.pending) {
            notify();
        }
    }
}

impl Drop for Batch {
    fn drop(&mut self) {
        self.run();
    }
}
