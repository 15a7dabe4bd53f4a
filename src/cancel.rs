//! Cooperative cancellation for long-running catalog calls.

use crate::errors::{CatalogError, CatalogResult};
use std::future::Future;
use tokio::sync::watch;

/// Triggers cancellation for every [`CancelSignal`] cloned from its pair.
#[derive(Debug, Clone)]
pub struct Canceller {
    tx: std::sync::Arc<watch::Sender<bool>>,
}

/// Observed by an in-flight operation; resolves once cancellation is requested.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

/// Create a linked canceller/signal pair.
pub fn cancellation() -> (Canceller, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (
        Canceller {
            tx: std::sync::Arc::new(tx),
        },
        CancelSignal { rx },
    )
}

impl Canceller {
    pub fn cancel(&self) {
        // send_replace stores the flag even when no signal is currently waiting
        self.tx.send_replace(true);
    }
}

impl CancelSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        CancelSignal { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Completes when cancellation is requested. Pends forever if the
    /// canceller is dropped without cancelling.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Drive `operation` to completion unless `cancel` fires first, in which case
/// the operation is dropped and [`CatalogError::Cancelled`] is returned.
pub async fn run_cancellable<T, F>(cancel: &CancelSignal, operation: F) -> CatalogResult<T>
where
    F: Future<Output = CatalogResult<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CatalogError::Cancelled),
        result = operation => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_wakes_waiter() {
        let (canceller, signal) = cancellation();
        let waiter = tokio::spawn(async move { signal.cancelled().await });
        canceller.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancel_before_wait_is_observed() {
        let (canceller, signal) = cancellation();
        canceller.cancel();
        assert!(signal.is_cancelled());
        tokio::time::timeout(Duration::from_millis(100), signal.cancelled())
            .await
            .expect("already-cancelled signal resolves immediately");
    }

    #[tokio::test]
    async fn test_run_cancellable_passes_result_through() {
        let result = run_cancellable(&CancelSignal::never(), async { Ok(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_run_cancellable_drops_pending_operation() {
        let (canceller, signal) = cancellation();
        canceller.cancel();
        let result: CatalogResult<()> =
            run_cancellable(&signal, std::future::pending::<CatalogResult<()>>()).await;
        assert_eq!(result, Err(CatalogError::Cancelled));
    }

    #[tokio::test]
    async fn test_never_signal_does_not_fire() {
        let signal = CancelSignal::never();
        let result = tokio::time::timeout(Duration::from_millis(20), signal.cancelled()).await;
        assert!(result.is_err());
        assert!(!signal.is_cancelled());
    }
}
