//! Bounded notification queue.

use crate::config::MAX_TOASTS;
use crate::types::{Toast, ToastId, ToastKind};

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: ToastId,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, kind: ToastKind, message: &str) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        if self.items.len() > MAX_TOASTS {
            self.items.remove(0);
        }
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }
}
