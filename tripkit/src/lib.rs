//! tripkit: headless state engine for travel-booking apps
//!
//! Like Redux/Elm, but as a library crate: views are pure functions of
//! state, and all state mutations happen through dispatched actions.
//! Reducers declare side effects; the dispatch loop runs them and feeds
//! results back in as actions.
//!
//! # Example
//! ```ignore
//! use tripkit::prelude::*;
//!
//! let mut app = Store::new(AppState::default(), app_reducer);
//! let mut search = Store::new(SearchState::default(), search_reducer);
//!
//! app.dispatch(AppAction::SetTheme(Theme::Dark));
//! search.dispatch(SearchAction::Submit(query));
//! ```

// Re-export everything from the layers
pub use tripkit_core::*;

pub use tripkit_api as api;
pub use tripkit_state as state;

/// Prelude for convenient imports
pub mod prelude {
    // Machinery
    pub use tripkit_core::{
        Action, ActionSummary, DispatchResult, LoggingMiddleware, Middleware, NoopMiddleware,
        Reducer, Store, StoreWithMiddleware, SummaryLoggingMiddleware, TaskKey, TaskManager,
    };

    // Application store
    pub use tripkit_state::app::{
        app_reducer, AppAction, AppEffect, AppState, CartItem, NotificationKind, Theme, User,
        UserPatch,
    };

    // Search store
    pub use tripkit_state::search::{
        search_reducer, FilterSet, FlightOffer, Leg, Passengers, SearchAction, SearchDraft,
        SearchEffect, SearchQuery, SearchState, TripPlan,
    };

    // Persistence
    pub use tripkit_state::persist::{
        hydrate_app_state, persist_app_effect, Settings, SettingsStore,
    };

    // REST collaborators
    pub use tripkit_api::{ApiError, AuthClient, Credentials, FlightsClient};
}
