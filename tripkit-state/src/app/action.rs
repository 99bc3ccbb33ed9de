//! Application actions
//!
//! Naming convention: noun prefix groups related actions (Cart*,
//! Notification*), verbs at the end. Setters that only flip a flag are
//! Set*.

use tripkit_core::{Action, ActionSummary};

use super::state::{CartItem, CartItemPatch, NotificationKind, Theme, User, UserPatch};

/// Actions handled by the application reducer
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    // ===== Session =====
    /// Successful login; both fields come from the auth collaborator
    Login { user: User, token: String },

    /// Clears session, cart, and cart total in one step
    Logout,

    /// Shallow-merge profile fields; no-op when signed out
    UpdateUser(UserPatch),

    // ===== Cart =====
    /// Add a line, merging quantity into an existing line with the same id
    CartAdd(CartItem),

    /// Remove a line by item id; no-op if absent
    CartRemove(u64),

    /// Merge fields into the matching line; no-op if absent
    CartUpdate { id: u64, patch: CartItemPatch },

    CartClear,

    // ===== UI flags =====
    SetLoading(bool),
    SetError(Option<String>),
    ClearError,

    /// Set + persist theme, and re-skin the presentation layer
    SetTheme(Theme),

    /// Set + persist interface language
    SetLanguage(String),

    // ===== Notifications =====
    NotificationPush {
        kind: NotificationKind,
        title: String,
        body: String,
    },

    /// Dismiss by id; no-op if already gone
    NotificationDismiss(u64),
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::Login { .. } => "Login",
            AppAction::Logout => "Logout",
            AppAction::UpdateUser(_) => "UpdateUser",
            AppAction::CartAdd(_) => "CartAdd",
            AppAction::CartRemove(_) => "CartRemove",
            AppAction::CartUpdate { .. } => "CartUpdate",
            AppAction::CartClear => "CartClear",
            AppAction::SetLoading(_) => "SetLoading",
            AppAction::SetError(_) => "SetError",
            AppAction::ClearError => "ClearError",
            AppAction::SetTheme(_) => "SetTheme",
            AppAction::SetLanguage(_) => "SetLanguage",
            AppAction::NotificationPush { .. } => "NotificationPush",
            AppAction::NotificationDismiss(_) => "NotificationDismiss",
        }
    }
}

impl ActionSummary for AppAction {
    fn summary(&self) -> String {
        match self {
            // Never log credentials
            AppAction::Login { user, .. } => {
                format!("Login {{ user: {}, token: <redacted> }}", user.id)
            }
            AppAction::CartAdd(item) => {
                format!("CartAdd {{ id: {}, qty: {} }}", item.id, item.quantity)
            }
            _ => format!("{:?}", self),
        }
    }
}
