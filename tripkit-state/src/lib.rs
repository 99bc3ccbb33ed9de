//! Domain stores for the tripkit booking engine
//!
//! Two stores make up the application's single source of truth:
//!
//! - [`app`]: session, cart, notifications, and cross-cutting UI flags
//!   (loading, error, theme, language)
//! - [`search`]: the submitted flight query, its results, the in-progress
//!   form draft, and display filters
//!
//! Both are driven through [`tripkit_core::Store`] with their reducers
//! ([`app::app_reducer`], [`search::search_reducer`]); views dispatch
//! actions and read state, never the other way around. [`persist`] mirrors
//! the three durable values (token, theme, language) to a settings file.
//!
//! # Example
//!
//! ```ignore
//! use tripkit_core::Store;
//! use tripkit_state::app::{app_reducer, AppAction, AppState};
//!
//! let mut store = Store::new(AppState::default(), app_reducer);
//! store.dispatch(AppAction::SetLanguage("uk".into()));
//! assert_eq!(store.state().language, "uk");
//! ```

pub mod app;
pub mod persist;
pub mod search;

pub use app::{app_reducer, AppAction, AppEffect, AppState};
pub use persist::{hydrate_app_state, persist_app_effect, Settings, SettingsError, SettingsStore};
pub use search::{search_reducer, SearchAction, SearchEffect, SearchState};
