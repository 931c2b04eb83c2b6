//! Cancellation pair for in-flight fetches.
//!
//! A watch channel split into a fire-once handle and a signal that can be
//! handed to an API call, so a screen can abandon a request it no longer
//! wants without tearing anything else down.

use tokio::sync::watch;

/// Owning half. Cancelling is idempotent; dropping the handle without
/// cancelling leaves the signal pending forever.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Fire the signal. Every clone of the paired signal resolves.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Receiving half, passed into cancellable API calls.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: Option<watch::Receiver<bool>>,
}

impl CancelSignal {
    /// A signal that never fires, for call sites with nothing to cancel
    /// them (one-shot CLI commands).
    pub fn never() -> Self {
        Self { rx: None }
    }

    pub fn is_cancelled(&self) -> bool {
        self.rx.as_ref().map_or(false, |rx| *rx.borrow())
    }

    /// Resolves once the paired handle cancels; pends forever otherwise.
    pub async fn cancelled(&mut self) {
        let Some(rx) = self.rx.as_mut() else {
            return std::future::pending().await;
        };

        if *rx.borrow() {
            return;
        }
        while rx.changed().await.is_ok() {
            if *rx.borrow() {
                return;
            }
        }
        // Handle dropped without firing: never resolve.
        std::future::pending().await
    }
}

/// Create a connected handle/signal pair.
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx: Some(rx) })
}
