//! User-visible notifications.
//!
//! Flows report through the [`Notifier`] trait; the browser implementation
//! is [`Toasts`], a reactive handle over a [`ToastQueue`] rendered by the
//! `Toaster` component.

use gloo_timers::callback::Timeout;
use leptos::{create_rw_signal, RwSignal, SignalUpdate, SignalWith};

use crate::config::TOAST_LIFETIME_MS;
use crate::state::ToastQueue;
use crate::types::{Toast, ToastId, ToastKind};

/// Sink for user-visible notifications.
pub trait Notifier {
    /// Show a toast that stays until dismissed.
    fn loading(&self, message: &str) -> ToastId;
    fn success(&self, message: &str) -> ToastId;
    fn error(&self, message: &str) -> ToastId;
    fn dismiss(&self, id: ToastId);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn loading(&self, message: &str) -> ToastId {
        (**self).loading(message)
    }

    fn success(&self, message: &str) -> ToastId {
        (**self).success(message)
    }

    fn error(&self, message: &str) -> ToastId {
        (**self).error(message)
    }

    fn dismiss(&self, id: ToastId) {
        (**self).dismiss(id)
    }
}

/// Reactive toast queue shared through [`AppState`](crate::state::AppState).
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    pub fn new() -> Self {
        Self(create_rw_signal(ToastQueue::default()))
    }

    /// Snapshot for rendering (tracked).
    pub fn items(&self) -> Vec<Toast> {
        self.0.with(|queue| queue.items().to_vec())
    }

    fn push(&self, kind: ToastKind, message: &str) -> ToastId {
        let mut id = 0;
        self.0.update(|queue| id = queue.push(kind, message));

        if kind.expires() {
            let toasts = *self;
            Timeout::new(TOAST_LIFETIME_MS, move || toasts.dismiss(id)).forget();
        }
        id
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn loading(&self, message: &str) -> ToastId {
        log::debug!("⏳ {}", message);
        self.push(ToastKind::Loading, message)
    }

    fn success(&self, message: &str) -> ToastId {
        log::info!("✅ {}", message);
        self.push(ToastKind::Success, message)
    }

    fn error(&self, message: &str) -> ToastId {
        log::warn!("❌ {}", message);
        self.push(ToastKind::Error, message)
    }

    fn dismiss(&self, id: ToastId) {
        self.0.update(|queue| {
            queue.dismiss(id);
        });
    }
}
