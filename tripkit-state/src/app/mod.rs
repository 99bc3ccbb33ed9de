//! The application store: session, cart, notifications, UI preferences

pub mod action;
pub mod effect;
pub mod reducer;
pub mod state;

pub use action::AppAction;
pub use effect::AppEffect;
pub use reducer::app_reducer;
pub use state::{
    cart_total, AppState, CartItem, CartItemPatch, Notification, NotificationKind, Session, Theme,
    User, UserPatch,
};
