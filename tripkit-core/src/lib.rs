//! Core traits and types for tripkit
//!
//! This crate provides the foundational abstractions for the tripkit booking
//! state engine: centralized state containers with a Redux/Elm-inspired
//! dispatch model, declared side effects, and keyed async task ownership.
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe state changes
//! - **Store**: Centralized state container with reducer pattern
//! - **Effect**: Declarative description of work the dispatch loop performs
//! - **TaskManager**: Keyed owner of in-flight async work
//!
//! # Async Handler Pattern
//!
//! State never waits on the network. A two-phase action pattern keeps
//! reducers synchronous:
//!
//! 1. **Intent actions** trigger async work (e.g., `Submit`)
//! 2. **Result actions** carry the outcome back (e.g., `DidLoad`, `DidError`)
//!
//! ```ignore
//! use tokio::sync::mpsc;
//!
//! // The reducer declares a fetch effect; the loop runs it
//! let result = store.dispatch(SearchAction::Submit(query));
//! for effect in result.effects {
//!     match effect {
//!         SearchEffect::Fetch { generation, query } => {
//!             tasks.spawn("flight_search", async move {
//!                 match client.search(&query).await {
//!                     Ok(offers) => SearchAction::DidLoad { generation, offers },
//!                     Err(e) => SearchAction::DidError {
//!                         generation,
//!                         message: e.user_message(),
//!                     },
//!                 }
//!             });
//!         }
//!     }
//! }
//!
//! // Main loop receives actions from both the UI and async completions
//! while let Some(action) = action_rx.recv().await {
//!     let result = store.dispatch(action);
//!     // ... handle result.effects
//! }
//! ```
//!
//! The `Did*` naming convention identifies result actions. Result actions
//! carry the request generation they belong to, so late responses from a
//! superseded request are discarded by the reducer rather than clobbering
//! newer state.

pub mod action;
pub mod store;
pub mod tasks;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionSummary};

// Store exports
pub use store::{
    ComposedMiddleware, DispatchResult, LoggingMiddleware, Middleware, NoopMiddleware, Reducer,
    Store, StoreWithMiddleware, SummaryLoggingMiddleware,
};

// Task exports
pub use tasks::{TaskKey, TaskManager};

// Testing exports
pub use testing::TestHarness;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionSummary};
    pub use crate::store::{
        ComposedMiddleware, DispatchResult, LoggingMiddleware, Middleware, NoopMiddleware, Reducer,
        Store, StoreWithMiddleware, SummaryLoggingMiddleware,
    };
    pub use crate::tasks::{TaskKey, TaskManager};
}
