//! Cooperative shutdown: an interrupt listener and a cancellation flag.
//!
//! The pipeline polls [`ShutdownSignal::is_triggered`] between entries, so
//! cancellation never interrupts an in-flight lookup. Already-published
//! entries stay valid and are still flushed to the destination file.

use tokio::sync::watch;

/// The triggering half of the cancellation pair.
pub struct ShutdownController {
    tx: watch::Sender<bool>,
}

impl ShutdownController {
    /// Requests cancellation. Safe to call more than once.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }
}

/// The observing half of the cancellation pair.
#[derive(Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Non-blocking check whether cancellation was requested.
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is requested. A controller dropped
    /// without triggering never resolves this.
    pub async fn triggered(&mut self) {
        if self.rx.wait_for(|&cancelled| cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Creates a connected controller/signal pair.
pub fn channel() -> (ShutdownController, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownController { tx }, ShutdownSignal { rx })
}

/// Waits for an interrupt from the OS, then triggers cancellation once.
///
/// Listens for Ctrl+C everywhere and additionally for SIGTERM on unix, the
/// signals a terminal or service manager sends to stop the run.
pub async fn listen_for_interrupt(controller: ShutdownController) {
    if wait_for_signal().await {
        controller.trigger();
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> bool {
    use tokio::signal::unix::{SignalKind, signal};

    let Ok(mut terminate) = signal(SignalKind::terminate()) else {
        return tokio::signal::ctrl_c().await.is_ok();
    };
    tokio::select! {
        result = tokio::signal::ctrl_c() => result.is_ok(),
        _ = terminate.recv() => true,
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> bool {
    tokio::signal::ctrl_c().await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_starts_untriggered() {
        let (_controller, signal) = channel();
        assert!(!signal.is_triggered());
    }

    #[test]
    fn test_trigger_is_observed() {
        let (controller, signal) = channel();
        controller.trigger();
        assert!(signal.is_triggered());
    }

    #[test]
    fn test_trigger_is_idempotent() {
        let (controller, signal) = channel();
        controller.trigger();
        controller.trigger();
        assert!(signal.is_triggered());
    }

    #[test]
    fn test_cloned_signals_observe_the_same_trigger() {
        let (controller, signal) = channel();
        let cloned = signal.clone();
        controller.trigger();
        assert!(signal.is_triggered());
        assert!(cloned.is_triggered());
    }

    #[tokio::test]
    async fn test_triggered_wakes_a_waiter() {
        let (controller, mut signal) = channel();
        let waiter = tokio::spawn(async move {
            signal.triggered().await;
        });
        controller.trigger();
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn test_dropped_controller_does_not_cancel() {
        let (controller, mut signal) = channel();
        drop(controller);
        assert!(!signal.is_triggered());

        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            signal.triggered(),
        )
        .await;
        assert!(pending.is_err());
    }
}
