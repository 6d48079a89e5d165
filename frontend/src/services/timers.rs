//! Timer abstraction for the simulated upload progress.

use std::cell::Cell;
use std::rc::Rc;

use futures::StreamExt;
use gloo_timers::future::{IntervalStream, TimeoutFuture};

/// Cancels a running ticker when dropped or on [`cancel`](Self::cancel).
#[derive(Debug, Default)]
pub struct TickerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TickerHandle {
    /// Flag shared with the ticking task.
    pub fn flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.cancelled)
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Periodic callbacks and delays.
#[allow(async_fn_in_trait)]
pub trait Timers {
    /// Call `tick` every `period_ms` until it returns false or the handle is cancelled.
    fn start_ticker(&self, period_ms: u32, tick: Box<dyn FnMut() -> bool>) -> TickerHandle;

    async fn sleep(&self, ms: u32);
}

/// `setInterval`/`setTimeout` through gloo-timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    fn start_ticker(&self, period_ms: u32, mut tick: Box<dyn FnMut() -> bool>) -> TickerHandle {
        let handle = TickerHandle::default();
        let cancelled = handle.flag();

        wasm_bindgen_futures::spawn_local(async move {
            // Dropping the stream clears the interval.
            let mut interval = IntervalStream::new(period_ms);
            while interval.next().await.is_some() {
                if cancelled.get() || !tick() {
                    break;
                }
            }
        });

        handle
    }

    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_cancels_on_drop() {
        let handle = TickerHandle::default();
        let flag = handle.flag();
        assert!(!flag.get());
        drop(handle);
        assert!(flag.get());
    }
}
