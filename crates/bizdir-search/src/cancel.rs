//! Cooperative cancellation for in-flight catalog requests.

use std::sync::Arc;

use tokio::sync::watch;

/// Clonable cancellation token.
///
/// The executor hands one clone to each spawned request task and keeps
/// another to cancel it when the request is superseded. Cancellation is
/// cooperative: the request future is raced against [`CancelToken::cancelled`]
/// and the resolution handler re-checks relevance at its single application
/// point, so a completion that loses the race is a guaranteed no-op.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Signals cancellation. Idempotent.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the token is cancelled. Never resolves otherwise.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if *rx.borrow() {
            return;
        }
        while rx.changed().await.is_ok() {
            if *rx.borrow() {
                return;
            }
        }
        // Every receiver holds an Arc of the sender, so the channel can only
        // close when this token is gone; pend rather than resolve spuriously.
        std::future::pending::<()>().await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
