//! In-memory doubles for the browser-facing traits.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::services::{CookieJar, Notifier, TickerHandle, Timers};
use crate::types::{AppResult, ToastId};

#[derive(Clone, Default)]
pub struct MemoryCookies(Rc<RefCell<HashMap<String, String>>>);

impl MemoryCookies {
    pub fn with(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().insert(name.to_string(), value.to_string());
        self
    }
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.0.borrow().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) -> AppResult<()> {
        self.0.borrow_mut().insert(name.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Loading(ToastId, String),
    Success(String),
    Error(String),
    Dismiss(ToastId),
}

/// Records notifications in call order. Only loading toasts get ids
/// worth tracking; they are numbered from 1.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
    next_id: Rc<RefCell<ToastId>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    fn next(&self) -> ToastId {
        let mut id = self.next_id.borrow_mut();
        *id += 1;
        *id
    }
}

impl Notifier for RecordingNotifier {
    fn loading(&self, message: &str) -> ToastId {
        let id = self.next();
        self.notices
            .borrow_mut()
            .push(Notice::Loading(id, message.to_string()));
        id
    }

    fn success(&self, message: &str) -> ToastId {
        self.notices
            .borrow_mut()
            .push(Notice::Success(message.to_string()));
        self.next()
    }

    fn error(&self, message: &str) -> ToastId {
        self.notices
            .borrow_mut()
            .push(Notice::Error(message.to_string()));
        self.next()
    }

    fn dismiss(&self, id: ToastId) {
        self.notices.borrow_mut().push(Notice::Dismiss(id));
    }
}

/// Runs up to `ticks` ticks synchronously when a ticker starts; sleeps
/// return immediately.
#[derive(Clone, Default)]
pub struct ManualTimers {
    ticks: usize,
    periods: Rc<RefCell<Vec<u32>>>,
    sleeps: Rc<RefCell<Vec<u32>>>,
}

impl ManualTimers {
    pub fn with_ticks(ticks: usize) -> Self {
        Self {
            ticks,
            ..Self::default()
        }
    }

    pub fn periods(&self) -> Vec<u32> {
        self.periods.borrow().clone()
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

impl Timers for ManualTimers {
    fn start_ticker(&self, period_ms: u32, mut tick: Box<dyn FnMut() -> bool>) -> TickerHandle {
        self.periods.borrow_mut().push(period_ms);
        for _ in 0..self.ticks {
            if !tick() {
                break;
            }
        }
        TickerHandle::default()
    }

    async fn sleep(&self, ms: u32) {
        self.sleeps.borrow_mut().push(ms);
    }
}
