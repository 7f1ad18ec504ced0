//! State container that runs intents through a reducer.

use std::marker::PhantomData;

use super::reducer::Reducer;

/// Owns the current state of one view-model and applies intents to it.
pub struct Store<R: Reducer> {
    state: R::State,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State) -> Self {
        Self {
            state,
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply `intent` and return the previous state if anything changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> Option<R::State> {
        let previous = self.state.clone();
        let next = R::reduce(std::mem::take(&mut self.state), intent);
        self.state = next;
        if self.state == previous {
            None
        } else {
            Some(previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Intent, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);
    impl UiState for Counter {}

    enum Step {
        Inc,
        Noop,
    }
    impl Intent for Step {}

    struct CounterReducer;
    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = Step;

        fn reduce(state: Counter, intent: Step) -> Counter {
            match intent {
                Step::Inc => Counter(state.0 + 1),
                Step::Noop => state,
            }
        }
    }

    #[test]
    fn dispatch_returns_previous_on_change() {
        let mut store = Store::<CounterReducer>::default();
        assert_eq!(store.dispatch(Step::Inc), Some(Counter(0)));
        assert_eq!(store.state(), &Counter(1));
    }

    #[test]
    fn dispatch_returns_none_when_unchanged() {
        let mut store = Store::<CounterReducer>::new(Counter(5));
        assert_eq!(store.dispatch(Step::Noop), None);
        assert_eq!(store.state(), &Counter(5));
    }
}
