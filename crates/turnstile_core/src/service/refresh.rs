//! Cancellable one-shot refresh timer.
//!
//! # Responsibility
//! - Run a callback once after a fixed delay, on a dedicated waiter thread.
//! - Guarantee the callback never fires after the owner cancels or drops
//!   the handle.
//!
//! # Invariants
//! - The callback runs at most once.
//! - Dropping the handle cancels a pending timer and joins the thread.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Handle to a scheduled one-shot callback.
///
/// The timer is owned by whoever holds the handle; the owning component's
/// teardown cancels the pending callback instead of leaking it.
#[derive(Debug)]
pub struct RefreshTimer {
    cancel_tx: Sender<()>,
    waiter: Option<JoinHandle<()>>,
}

impl RefreshTimer {
    /// Schedules `callback` to run once after `delay`.
    pub fn schedule(delay: Duration, callback: impl FnOnce() + Send + 'static) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let waiter = std::thread::spawn(move || {
            // A cancel signal (or a dropped handle) wakes the wait early;
            // only a clean timeout runs the callback.
            if cancel_rx.recv_timeout(delay) == Err(RecvTimeoutError::Timeout) {
                callback();
            }
        });

        Self {
            cancel_tx,
            waiter: Some(waiter),
        }
    }

    /// Cancels the pending callback and waits for the waiter thread.
    ///
    /// A timer that already fired is left unchanged; cancel is then a no-op.
    pub fn cancel(mut self) {
        self.cancel_and_join();
    }

    fn cancel_and_join(&mut self) {
        let _ = self.cancel_tx.send(());
        if let Some(waiter) = self.waiter.take() {
            let _ = waiter.join();
        }
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.cancel_and_join();
    }
}

#[cfg(test)]
mod tests {
    use super::RefreshTimer;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn fires_once_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_timer = Arc::clone(&fired);

        let timer = RefreshTimer::schedule(Duration::from_millis(10), move || {
            fired_in_timer.fetch_add(1, Ordering::SeqCst);
        });
        std::thread::sleep(Duration::from_millis(60));
        drop(timer);

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_prevents_firing() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_timer = Arc::clone(&fired);

        let timer = RefreshTimer::schedule(Duration::from_millis(50), move || {
            fired_in_timer.fetch_add(1, Ordering::SeqCst);
        });
        timer.cancel();
        std::thread::sleep(Duration::from_millis(80));

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn drop_cancels_pending_timer() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_timer = Arc::clone(&fired);

        let timer = RefreshTimer::schedule(Duration::from_millis(50), move || {
            fired_in_timer.fetch_add(1, Ordering::SeqCst);
        });
        drop(timer);
        std::thread::sleep(Duration::from_millis(80));

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
