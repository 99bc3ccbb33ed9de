//! Application reducer - all session/cart/UI mutations happen here
//!
//! The reducer never fails. Operations on absent ids are no-ops, and
//! quantities are clamped to at least 1 at this boundary. `cart_total` is
//! recomputed after every cart mutation so the stored total always equals
//! the sum over the lines.

use tripkit_core::DispatchResult;

use super::action::AppAction;
use super::effect::AppEffect;
use super::state::{cart_total, AppState, Notification, Session};

pub fn app_reducer(state: &mut AppState, action: AppAction) -> DispatchResult<AppEffect> {
    match action {
        // ===== Session =====
        AppAction::Login { user, token } => {
            state.session = Session {
                user: Some(user),
                token: Some(token.clone()),
            };
            state.error = None;
            DispatchResult::changed_with(AppEffect::PersistToken(token))
        }

        AppAction::Logout => {
            // Session, cart, and total go together; observers never see a
            // signed-out state with a populated cart
            state.session = Session::default();
            state.cart.clear();
            state.cart_total = cart_total(&state.cart);
            DispatchResult::changed_with(AppEffect::ClearToken)
        }

        AppAction::UpdateUser(patch) => match state.session.user.as_mut() {
            Some(user) => {
                user.apply(patch);
                DispatchResult::changed()
            }
            None => {
                tracing::warn!("UpdateUser dispatched without an active session; ignoring");
                DispatchResult::unchanged()
            }
        },

        // ===== Cart =====
        AppAction::CartAdd(mut item) => {
            item.quantity = item.quantity.max(1);
            match state.cart.iter_mut().find(|line| line.id == item.id) {
                Some(line) => line.quantity += item.quantity,
                None => state.cart.push(item),
            }
            state.cart_total = cart_total(&state.cart);
            DispatchResult::changed()
        }

        AppAction::CartRemove(id) => {
            let before = state.cart.len();
            state.cart.retain(|line| line.id != id);
            if state.cart.len() == before {
                return DispatchResult::unchanged();
            }
            state.cart_total = cart_total(&state.cart);
            DispatchResult::changed()
        }

        AppAction::CartUpdate { id, patch } => {
            match state.cart.iter_mut().find(|line| line.id == id) {
                Some(line) => {
                    if let Some(title) = patch.title {
                        line.title = title;
                    }
                    if let Some(price) = patch.price {
                        line.price = price;
                    }
                    if let Some(quantity) = patch.quantity {
                        line.quantity = quantity.max(1);
                    }
                    state.cart_total = cart_total(&state.cart);
                    DispatchResult::changed()
                }
                None => DispatchResult::unchanged(),
            }
        }

        AppAction::CartClear => {
            if state.cart.is_empty() {
                return DispatchResult::unchanged();
            }
            state.cart.clear();
            state.cart_total = cart_total(&state.cart);
            DispatchResult::changed()
        }

        // ===== UI flags =====
        AppAction::SetLoading(loading) => {
            if state.loading == loading {
                return DispatchResult::unchanged();
            }
            state.loading = loading;
            DispatchResult::changed()
        }

        AppAction::SetError(error) => {
            if state.error == error {
                return DispatchResult::unchanged();
            }
            state.error = error;
            DispatchResult::changed()
        }

        AppAction::ClearError => {
            if state.error.is_none() {
                return DispatchResult::unchanged();
            }
            state.error = None;
            DispatchResult::changed()
        }

        AppAction::SetTheme(theme) => {
            if state.theme == theme {
                return DispatchResult::unchanged();
            }
            state.theme = theme;
            DispatchResult::changed_with_many(vec![
                AppEffect::PersistTheme(theme),
                AppEffect::ApplyTheme(theme),
            ])
        }

        AppAction::SetLanguage(language) => {
            if state.language == language {
                return DispatchResult::unchanged();
            }
            state.language = language.clone();
            DispatchResult::changed_with(AppEffect::PersistLanguage(language))
        }

        // ===== Notifications =====
        AppAction::NotificationPush { kind, title, body } => {
            let id = state.next_notification_id;
            state.next_notification_id += 1;
            state.notifications.push(Notification {
                id,
                kind,
                title,
                body,
            });
            DispatchResult::changed()
        }

        AppAction::NotificationDismiss(id) => {
            let before = state.notifications.len();
            state.notifications.retain(|n| n.id != id);
            if state.notifications.len() == before {
                DispatchResult::unchanged()
            } else {
                DispatchResult::changed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CartItem, CartItemPatch, NotificationKind, Theme, User, UserPatch};
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;
    use tripkit_core::testing::TestHarness;

    fn user(id: u64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.into(),
            email: email.into(),
            avatar_url: None,
            notification_prefs: BTreeMap::new(),
        }
    }

    fn item(id: u64, price: i64, quantity: u32) -> CartItem {
        CartItem {
            id,
            title: format!("item-{}", id),
            price: Decimal::from(price),
            quantity,
        }
    }

    fn harness() -> TestHarness<AppState, AppAction, AppEffect> {
        TestHarness::new(AppState::default(), app_reducer)
    }

    #[test]
    fn test_login_then_logout() {
        let mut h = harness();

        h.dispatch(AppAction::Login {
            user: user(1, "A", "a@x.com"),
            token: "tok123".into(),
        });

        assert!(h.state().session.is_authenticated());
        assert_eq!(h.state().session.token.as_deref(), Some("tok123"));
        assert_eq!(
            h.drain_effects(),
            vec![AppEffect::PersistToken("tok123".into())]
        );

        h.dispatch(AppAction::Logout);

        assert!(!h.state().session.is_authenticated());
        assert_eq!(h.state().session.token, None);
        assert_eq!(h.drain_effects(), vec![AppEffect::ClearToken]);
    }

    #[test]
    fn test_logout_clears_session_and_cart_atomically() {
        let mut h = harness();
        h.dispatch(AppAction::Login {
            user: user(1, "A", "a@x.com"),
            token: "tok".into(),
        });
        h.dispatch(AppAction::CartAdd(item(5, 10, 2)));

        h.dispatch(AppAction::Logout);

        let state = h.state();
        assert!(!state.session.is_authenticated());
        assert_eq!(state.session.user, None);
        assert_eq!(state.session.token, None);
        assert!(state.cart.is_empty());
        assert_eq!(state.cart_total, Decimal::ZERO);
    }

    #[test]
    fn test_login_clears_prior_error() {
        let mut h = harness();
        h.dispatch(AppAction::SetError(Some("bad credentials".into())));

        h.dispatch(AppAction::Login {
            user: user(1, "A", "a@x.com"),
            token: "tok".into(),
        });

        assert_eq!(h.state().error, None);
    }

    #[test]
    fn test_update_user_merges_fields() {
        let mut h = harness();
        h.dispatch(AppAction::Login {
            user: user(1, "A", "a@x.com"),
            token: "tok".into(),
        });

        h.dispatch(AppAction::UpdateUser(UserPatch {
            name: Some("B".into()),
            ..Default::default()
        }));

        let u = h.state().session.user.as_ref().unwrap();
        assert_eq!(u.name, "B");
        assert_eq!(u.email, "a@x.com");
    }

    #[test]
    fn test_update_user_without_session_is_noop() {
        let mut h = harness();

        let changed = h.dispatch(AppAction::UpdateUser(UserPatch {
            name: Some("B".into()),
            ..Default::default()
        }));

        assert!(!changed);
        assert_eq!(h.state().session.user, None);
    }

    #[test]
    fn test_cart_add_merges_same_id() {
        let mut h = harness();

        h.dispatch(AppAction::CartAdd(item(5, 10, 1)));
        h.dispatch(AppAction::CartAdd(item(5, 10, 2)));

        assert_eq!(h.state().cart.len(), 1);
        assert_eq!(h.state().cart[0].quantity, 3);
        assert_eq!(h.state().cart_total, Decimal::from(30));
    }

    #[test]
    fn test_cart_add_distinct_ids_are_distinct_lines() {
        let mut h = harness();

        h.dispatch(AppAction::CartAdd(item(1, 10, 1)));
        h.dispatch(AppAction::CartAdd(item(2, 20, 1)));

        assert_eq!(h.state().cart.len(), 2);
        assert_eq!(h.state().cart_total, Decimal::from(30));
    }

    #[test]
    fn test_cart_add_clamps_zero_quantity() {
        let mut h = harness();

        h.dispatch(AppAction::CartAdd(item(1, 10, 0)));

        assert_eq!(h.state().cart[0].quantity, 1);
        assert_eq!(h.state().cart_total, Decimal::from(10));
    }

    #[test]
    fn test_cart_total_invariant_across_mutations() {
        let mut h = harness();

        h.dispatch_all([
            AppAction::CartAdd(item(1, 10, 2)),
            AppAction::CartAdd(item(2, 7, 1)),
            AppAction::CartUpdate {
                id: 1,
                patch: CartItemPatch {
                    quantity: Some(5),
                    ..Default::default()
                },
            },
            AppAction::CartRemove(2),
        ]);

        let state = h.state();
        assert_eq!(state.cart_total, cart_total(&state.cart));
        assert_eq!(state.cart_total, Decimal::from(50));

        h.dispatch(AppAction::CartClear);
        assert_eq!(h.state().cart_total, Decimal::ZERO);
    }

    #[test]
    fn test_cart_remove_absent_is_noop() {
        let mut h = harness();
        h.dispatch(AppAction::CartAdd(item(1, 10, 1)));

        let changed = h.dispatch(AppAction::CartRemove(99));

        assert!(!changed);
        assert_eq!(h.state().cart.len(), 1);
    }

    #[test]
    fn test_cart_update_absent_is_noop() {
        let mut h = harness();

        let changed = h.dispatch(AppAction::CartUpdate {
            id: 99,
            patch: CartItemPatch {
                quantity: Some(3),
                ..Default::default()
            },
        });

        assert!(!changed);
    }

    #[test]
    fn test_cart_update_clamps_quantity() {
        let mut h = harness();
        h.dispatch(AppAction::CartAdd(item(1, 10, 2)));

        h.dispatch(AppAction::CartUpdate {
            id: 1,
            patch: CartItemPatch {
                quantity: Some(0),
                ..Default::default()
            },
        });

        assert_eq!(h.state().cart[0].quantity, 1);
        assert_eq!(h.state().cart_total, Decimal::from(10));
    }

    #[test]
    fn test_notification_ids_are_unique_and_monotonic() {
        let mut h = harness();

        for i in 0..3 {
            h.dispatch(AppAction::NotificationPush {
                kind: NotificationKind::Info,
                title: format!("t{}", i),
                body: String::new(),
            });
        }

        let ids: Vec<u64> = h.state().notifications.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(h.state().last_notification().unwrap().title, "t2");
    }

    #[test]
    fn test_notification_dismiss_is_idempotent() {
        let mut h = harness();
        for i in 0..3 {
            h.dispatch(AppAction::NotificationPush {
                kind: NotificationKind::Info,
                title: format!("t{}", i),
                body: String::new(),
            });
        }

        // Dismissing a missing id changes nothing
        let changed = h.dispatch(AppAction::NotificationDismiss(42));
        assert!(!changed);
        assert_eq!(h.state().notifications.len(), 3);

        // Dismissing an existing id removes exactly that entry, order kept
        h.dispatch(AppAction::NotificationDismiss(2));
        let ids: Vec<u64> = h.state().notifications.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_set_theme_persists_and_applies() {
        let mut h = harness();

        h.dispatch(AppAction::SetTheme(Theme::Dark));

        assert_eq!(h.state().theme, Theme::Dark);
        assert_eq!(
            h.drain_effects(),
            vec![
                AppEffect::PersistTheme(Theme::Dark),
                AppEffect::ApplyTheme(Theme::Dark),
            ]
        );

        // Re-setting the same theme writes nothing
        let changed = h.dispatch(AppAction::SetTheme(Theme::Dark));
        assert!(!changed);
        assert!(h.effects().is_empty());
    }

    #[test]
    fn test_set_language_persists() {
        let mut h = harness();

        h.dispatch(AppAction::SetLanguage("uk".into()));

        assert_eq!(h.state().language, "uk");
        assert_eq!(
            h.drain_effects(),
            vec![AppEffect::PersistLanguage("uk".into())]
        );
    }

    #[test]
    fn test_error_flag_setters() {
        let mut h = harness();

        h.dispatch(AppAction::SetError(Some("boom".into())));
        assert_eq!(h.state().error.as_deref(), Some("boom"));

        h.dispatch(AppAction::ClearError);
        assert_eq!(h.state().error, None);

        // Clearing an absent error reports no change
        assert!(!h.dispatch(AppAction::ClearError));
    }
}
