//! Client-side application state.
//!
//! Process-wide state is held in explicit objects handed out through
//! Leptos context instead of ambient globals:
//!
//! - [`auth`] - Whether the session is authenticated, and its token
//! - [`user`] - Profile fields seeded from the `user` cookie
//! - [`upload`] - Per-dropzone upload session and dialog open state
//! - [`toasts`] - Notification queue
//!
//! Every write goes through [`StateCell::modify`], so the same flow code
//! drives a reactive `RwSignal` in the browser and a plain `RefCell` in tests.

pub mod auth;
pub mod toasts;
pub mod upload;
pub mod user;

pub use auth::*;
pub use toasts::*;
pub use upload::*;
pub use user::*;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::{create_rw_signal, provide_context, RwSignal, SignalUpdate};

use crate::services::{CookieJar, Toasts};

/// Single update channel for a piece of shared state.
pub trait StateCell<T> {
    /// Mutate the value in place.
    fn modify(&self, f: impl FnOnce(&mut T));

    /// Overwrite the value.
    fn replace(&self, value: T) {
        self.modify(|slot| *slot = value);
    }
}

impl<T: 'static> StateCell<T> for RwSignal<T> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        SignalUpdate::update(self, f);
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Everything the components share, provided once through context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub auth: RwSignal<AuthState>,
    pub user: RwSignal<UserState>,
    pub toasts: Toasts,
}

impl AppState {
    /// Build the state from the cookies present at load time.
    pub fn bootstrap(cookies: &impl CookieJar) -> Self {
        let auth = AuthState::from_cookies(cookies);
        let user = UserState::from_cookies(cookies);

        log::info!(
            "🍪 Session bootstrapped (authenticated: {}, user: {})",
            auth.is_authenticated,
            user.email.as_deref().unwrap_or("anonymous")
        );

        Self {
            auth: create_rw_signal(auth),
            user: create_rw_signal(user),
            toasts: Toasts::new(),
        }
    }

    /// Make the state available to every descendant component.
    pub fn provide(self) {
        provide_context(self);
    }
}
