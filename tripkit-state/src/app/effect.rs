//! Application effects - side effects declared by the app reducer
//!
//! Effects are handled by the dispatch loop, which owns the settings store
//! and whatever presentation layer is attached.

use super::state::Theme;

/// Side effects declared by [`app_reducer`](super::reducer::app_reducer)
#[derive(Debug, Clone, PartialEq)]
pub enum AppEffect {
    /// Mirror the session token to durable settings
    PersistToken(String),

    /// Remove the mirrored token (logout)
    ClearToken,

    /// Mirror the theme preference to durable settings
    PersistTheme(Theme),

    /// Mirror the language preference to durable settings
    PersistLanguage(String),

    /// Re-skin the presentation layer; outside the store's responsibility,
    /// delegated to whoever renders
    ApplyTheme(Theme),
}
