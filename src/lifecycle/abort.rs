//! Abort handle for a single in-flight fetch.

use tokio::sync::broadcast;

/// Owner side of a cancellable activation.
///
/// The activation listens on [`AbortHandle::listener`]. Firing the handle,
/// or dropping it, ends the activation without delivering an outcome. Firing
/// consumes the handle, so it can only happen once.
#[derive(Debug)]
pub struct AbortHandle {
    tx: broadcast::Sender<()>,
}

impl AbortHandle {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to pass to [`crate::api::Fetch::subscribe`]. Take it before
    /// activating, so an early abort is not missed.
    pub fn listener(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Abort the activation. Returns false when it had already finished.
    pub fn trigger(self) -> bool {
        self.tx.send(()).is_ok()
    }
}
