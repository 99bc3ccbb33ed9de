//! Action traits for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to a store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged, replayed, or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across threads
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Log-friendly rendering for actions
///
/// The default `Debug` output of a result action can be huge (a full page of
/// flight offers, say). Implement this to log a condensed form instead.
pub trait ActionSummary {
    /// One-line summary of the action for the dispatch log
    fn summary(&self) -> String;
}
