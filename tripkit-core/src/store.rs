//! Centralized state store with an effect-emitting reducer
//!
//! State lives in a [`Store`]; the only way to change it is to dispatch an
//! action. The reducer is a pure function over `(state, action)` — anything
//! that touches the outside world (an HTTP call, a settings write) is
//! returned from the reducer as a declared effect, not performed inside it.
//! The dispatch loop decides what to do with the effects.
//!
//! # Example
//!
//! ```ignore
//! use tripkit_core::{Action, DispatchResult, Store};
//!
//! enum Effect {
//!     PersistToken(String),
//! }
//!
//! #[derive(Default)]
//! struct State {
//!     token: Option<String>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Login { token: String },
//! }
//!
//! fn reducer(state: &mut State, action: AppAction) -> DispatchResult<Effect> {
//!     match action {
//!         AppAction::Login { token } => {
//!             state.token = Some(token.clone());
//!             DispatchResult::changed_with(Effect::PersistToken(token))
//!         }
//!     }
//! }
//!
//! let mut store = Store::new(State::default(), reducer);
//! let result = store.dispatch(AppAction::Login { token: "tok".into() });
//! assert!(result.changed);
//! for effect in result.effects {
//!     // hand to the effect handler
//! }
//! ```

use std::marker::PhantomData;

use crate::action::{Action, ActionSummary};

/// Result of dispatching an action.
///
/// Carries the state-change indicator (did anything observers care about
/// actually change?) and the effects the reducer declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed, one effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// State changed, several effects.
    #[inline]
    pub fn changed_with_many(effects: Vec<E>) -> Self {
        Self {
            changed: true,
            effects,
        }
    }

    /// One effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// Add an effect to this result.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Returns true if there are any effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer function: mutates state for an action and declares effects.
pub type Reducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Centralized state container with a reducer-pattern dispatch.
///
/// # Type Parameters
/// * `S` - The state type
/// * `A` - The action type (must implement [`Action`])
/// * `E` - The effect type declared by the reducer
pub struct Store<S, A: Action, E> {
    state: S,
    reducer: Reducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A: Action, E> Store<S, A, E> {
    /// Create a new store with initial state and reducer.
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Get a reference to the current state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state.
    ///
    /// Use this sparingly - prefer dispatching actions for state changes.
    /// Mainly useful for initialization, e.g. hydrating persisted settings
    /// into the state before the dispatch loop starts.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Dispatch an action to the store.
    ///
    /// The reducer is called with the current state and action, returning
    /// whether state changed and any effects to process.
    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// Middleware trait for intercepting actions
///
/// Implement this trait to add logging, metrics, or other cross-cutting
/// concerns to a store. Middleware sees the action before and after the
/// reducer runs, but never the effects.
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the action is processed by the reducer
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A store with middleware support.
///
/// Wraps a [`Store`] and calls middleware hooks around each dispatch.
pub struct StoreWithMiddleware<S, A: Action, E, M: Middleware<A>> {
    store: Store<S, A, E>,
    middleware: M,
}

impl<S, A: Action, E, M: Middleware<A>> StoreWithMiddleware<S, A, E, M> {
    /// Create a new store with middleware.
    pub fn new(state: S, reducer: Reducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Get a reference to the current state.
    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Get a mutable reference to the state.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    /// Get a reference to the middleware.
    #[inline]
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Get a mutable reference to the middleware.
    #[inline]
    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }

    /// Dispatch an action through middleware and store.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs dispatched actions through `tracing`
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Log after dispatch only (the common case).
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Log both before and after dispatch.
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                state_changed = state_changed,
                "Action processed"
            );
        }
    }
}

/// Middleware that logs the condensed [`ActionSummary`] rendering
///
/// Prefer this over [`LoggingMiddleware`] for stores whose result actions
/// carry big payloads (a search result set, say).
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryLoggingMiddleware;

impl<A: Action + ActionSummary> Middleware<A> for SummaryLoggingMiddleware {
    fn before(&mut self, _action: &A) {}

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(
            action = %action.summary(),
            state_changed = state_changed,
            "Action processed"
        );
    }
}

/// Compose multiple middleware into a single middleware
pub struct ComposedMiddleware<A: Action> {
    middlewares: Vec<Box<dyn Middleware<A>>>,
}

impl<A: Action> std::fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    /// Create a new composed middleware
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Add a middleware to the composition
    pub fn add<M: Middleware<A> + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&mut self, action: &A) {
        for middleware in &mut self.middlewares {
            middleware.before(action);
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        // Call in reverse order for proper nesting
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.after(action, state_changed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestState {
        counter: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
        Announce,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "Increment",
                TestAction::Decrement => "Decrement",
                TestAction::NoOp => "NoOp",
                TestAction::Announce => "Announce",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Log(String),
        Save,
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Increment => {
                state.counter += 1;
                DispatchResult::changed()
            }
            TestAction::Decrement => {
                state.counter -= 1;
                DispatchResult::changed_with(TestEffect::Log(format!("counter: {}", state.counter)))
            }
            TestAction::NoOp => DispatchResult::unchanged(),
            TestAction::Announce => DispatchResult::unchanged()
                .with(TestEffect::Log("announce".into()))
                .with(TestEffect::Save),
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Increment);
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(store.state().counter, 1);

        let result = store.dispatch(TestAction::NoOp);
        assert!(!result.changed);
        assert_eq!(store.state().counter, 1);
    }

    #[test]
    fn test_store_emits_effects() {
        let mut store = Store::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Decrement);
        assert!(result.changed);
        assert!(matches!(&result.effects[0], TestEffect::Log(s) if s == "counter: -1"));

        let result = store.dispatch(TestAction::Announce);
        assert!(!result.changed);
        assert_eq!(result.effects.len(), 2);
        assert!(result.has_effects());
    }

    #[test]
    fn test_dispatch_result_builders() {
        let r: DispatchResult<TestEffect> = DispatchResult::unchanged();
        assert!(!r.changed);
        assert!(r.effects.is_empty());

        let r = DispatchResult::changed_with(TestEffect::Save);
        assert!(r.changed);
        assert_eq!(r.effects, vec![TestEffect::Save]);

        let r =
            DispatchResult::changed_with_many(vec![TestEffect::Save, TestEffect::Log("x".into())]);
        assert!(r.changed);
        assert_eq!(r.effects.len(), 2);

        let r = DispatchResult::effect(TestEffect::Save);
        assert!(!r.changed);
        assert!(r.has_effects());
    }

    #[test]
    fn test_store_state_mut() {
        let mut store = Store::new(TestState::default(), test_reducer);

        store.state_mut().counter = 100;
        assert_eq!(store.state().counter, 100);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, _state_changed: bool) {
            self.after_count += 1;
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(TestAction::Increment);
        store.dispatch(TestAction::Increment);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_count, 2);
        assert_eq!(store.state().counter, 2);
    }
}
