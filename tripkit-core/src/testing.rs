//! Test utilities for tripkit stores
//!
//! [`TestHarness`] wraps a [`Store`](crate::Store) and accumulates every
//! effect the reducer declares, so scenario tests can drive a sequence of
//! actions and then assert on both the resulting state and the declared
//! side effects - without standing up a dispatch loop.
//!
//! # Example
//!
//! ```ignore
//! use tripkit_core::testing::TestHarness;
//!
//! let mut harness = TestHarness::new(AppState::default(), app_reducer);
//!
//! harness.dispatch(AppAction::Login { user, token: "tok".into() });
//! assert!(harness.state().session.is_authenticated());
//!
//! let effects = harness.drain_effects();
//! assert!(matches!(effects[0], AppEffect::PersistToken(_)));
//! ```

use crate::action::Action;
use crate::store::{DispatchResult, Reducer, Store};

/// Headless harness around a store for scenario tests.
pub struct TestHarness<S, A: Action, E> {
    store: Store<S, A, E>,
    effects: Vec<E>,
    dispatched: Vec<&'static str>,
}

impl<S, A: Action, E> TestHarness<S, A, E> {
    /// Create a harness with initial state and reducer.
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self {
            store: Store::new(state, reducer),
            effects: Vec::new(),
            dispatched: Vec::new(),
        }
    }

    /// Dispatch an action; effects are collected for later inspection.
    ///
    /// Returns whether the reducer reported a state change.
    pub fn dispatch(&mut self, action: A) -> bool {
        self.dispatched.push(action.name());
        let DispatchResult { changed, effects } = self.store.dispatch(action);
        self.effects.extend(effects);
        changed
    }

    /// Dispatch a sequence of actions, discarding change flags.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = A>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Current state.
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Mutable state access for test setup.
    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    /// Effects collected since the last drain.
    pub fn effects(&self) -> &[E] {
        &self.effects
    }

    /// Take all collected effects, clearing the buffer.
    pub fn drain_effects(&mut self) -> Vec<E> {
        std::mem::take(&mut self.effects)
    }

    /// Names of every action dispatched so far, in order.
    pub fn dispatched_names(&self) -> &[&'static str] {
        &self.dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestState {
        value: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Set(i32),
        Announce,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Set(_) => "Set",
                TestAction::Announce => "Announce",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Announced(i32),
    }

    fn reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Set(v) => {
                state.value = v;
                DispatchResult::changed()
            }
            TestAction::Announce => DispatchResult::effect(TestEffect::Announced(state.value)),
        }
    }

    #[test]
    fn test_harness_collects_effects() {
        let mut harness = TestHarness::new(TestState::default(), reducer);

        assert!(harness.dispatch(TestAction::Set(7)));
        assert!(!harness.dispatch(TestAction::Announce));

        assert_eq!(harness.state().value, 7);
        assert_eq!(harness.effects(), &[TestEffect::Announced(7)]);

        let drained = harness.drain_effects();
        assert_eq!(drained.len(), 1);
        assert!(harness.effects().is_empty());
    }

    #[test]
    fn test_harness_records_action_names() {
        let mut harness = TestHarness::new(TestState::default(), reducer);

        harness.dispatch_all([TestAction::Set(1), TestAction::Announce]);

        assert_eq!(harness.dispatched_names(), &["Set", "Announce"]);
    }
}
