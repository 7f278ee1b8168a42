//! Trailing-edge debounce for search input.
//!
//! Each call cancels the pending invocation and schedules a new one
//! `wait` later, so a burst of keystrokes runs the search once, with the
//! last argument, after the input has been quiet for `wait`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// A debounced wrapper around `Fn(A)`.
///
/// Calls must be made from within a Tokio runtime. Dropping the wrapper
/// cancels any pending invocation.
pub struct Debounced<A> {
    inner: Arc<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Wraps `f` so that only the last call in a burst runs, `wait` after it.
pub fn debounce<A, F>(f: F, wait: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced {
        inner: Arc::new(f),
        wait,
        pending: Mutex::new(None),
    }
}

impl<A: Send + 'static> Debounced<A> {
    /// Schedules `f(arg)` after the quiet period, replacing any pending call.
    pub fn call(&self, arg: A) {
        let mut pending = self.lock_pending();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let f = Arc::clone(&self.inner);
        // Deadline is fixed here, not when the task is first polled.
        let delay = tokio::time::sleep(self.wait);
        *pending = Some(tokio::spawn(async move {
            delay.await;
            f(arg);
        }));
    }

    /// Cancels the pending invocation. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.lock_pending().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Drop for Debounced<A> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
