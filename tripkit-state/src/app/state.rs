//! Application state - session, cart, notifications, UI flags
//!
//! One struct per concern, all owned by [`AppState`]. Components receive
//! `&AppState`; only the reducer mutates it.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Authenticated user profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    /// Per-channel notification opt-ins ("email", "sms", ...)
    #[serde(default)]
    pub notification_prefs: BTreeMap<String, bool>,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_prefs: Option<BTreeMap<String, bool>>,
}

impl User {
    /// Shallow-merge a patch into this profile.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(prefs) = patch.notification_prefs {
            self.notification_prefs = prefs;
        }
    }
}

/// The authenticated identity, if any.
///
/// Authentication is derived rather than stored: the session is
/// authenticated exactly when both user and token are present, so the
/// invariant cannot drift.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// A line item in the booking cart
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub id: u64,
    pub title: String,
    /// Unit price
    pub price: Decimal,
    /// Always >= 1; the reducer clamps incoming values
    pub quantity: u32,
}

/// Partial cart-item update; `None` fields are left untouched
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartItemPatch {
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

/// Sum of price x quantity over the whole cart.
pub fn cart_total(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum()
}

/// Severity of a UI notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// An ephemeral UI message; stays until explicitly dismissed
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    /// Unique, assigned by the reducer from a monotonic counter
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

/// Color theme preference, mirrored to the settings file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Application state - session, cart, and cross-cutting UI flags
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub session: Session,

    /// Booking cart; same-id additions merge into one line
    pub cart: Vec<CartItem>,

    /// Stored total, recomputed after every cart mutation
    pub cart_total: Decimal,

    /// App-wide busy flag (page-level spinners)
    pub loading: bool,

    /// App-wide error banner text
    pub error: Option<String>,

    pub theme: Theme,

    /// BCP 47-ish language tag ("en", "uk", ...)
    pub language: String,

    /// Pending notifications, oldest first
    pub notifications: Vec<Notification>,

    /// Next notification id; never reused within a session
    pub next_notification_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            cart: Vec::new(),
            cart_total: Decimal::ZERO,
            loading: false,
            error: None,
            theme: Theme::default(),
            language: "en".into(),
            notifications: Vec::new(),
            next_notification_id: 1,
        }
    }
}

impl AppState {
    /// Find a cart line by item id.
    pub fn cart_item(&self, id: u64) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.id == id)
    }

    /// The most recently pushed notification, if any.
    ///
    /// Callers that need the id of a notification they just pushed (to
    /// dismiss it later) read it from here right after dispatch.
    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}
