//! Application root component.
//!
//! # Lifecycle
//! ```text
//! Uninitialized ──init()──▶ Pending ──response / failure──▶ Settled
//!                              │
//!                              └──destroy() / drop──────────▶ Settled (no callback)
//! ```

use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{ApiClient, ApiError, Observer};
use crate::app::signal::Signal;
use crate::lifecycle::AbortHandle;

/// Title shown by the application shell.
pub const TITLE: &str = "Frontend";

/// Observable progress of the root's startup fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootState {
    Uninitialized,
    Pending,
    Settled,
}

/// Writes the fetch outcome to the diagnostic log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn next(self, value: Value) {
        tracing::info!(users = %value, "Users fetched");
    }

    fn error(self, err: ApiError) {
        tracing::error!(url = %err.url(), status = ?err.status(), error = %err, "Fetching users failed");
    }
}

/// Top-level component: owns the title and triggers one users fetch on init.
pub struct AppRoot {
    title: Signal<String>,
    api: ApiClient,
    abort: Option<AbortHandle>,
    task: Option<JoinHandle<()>>,
    settled: bool,
    destroyed: bool,
}

impl AppRoot {
    /// Construct the root. No request is sent until [`AppRoot::init`].
    pub fn new(api: ApiClient) -> Self {
        Self {
            title: Signal::new(TITLE.to_string()),
            api,
            abort: None,
            task: None,
            settled: false,
            destroyed: false,
        }
    }

    /// Current title.
    pub fn title(&self) -> String {
        self.title.get()
    }

    /// Receiver notified if the title ever changes.
    pub fn watch_title(&self) -> watch::Receiver<String> {
        self.title.subscribe()
    }

    /// Lifecycle hook. The first call starts the users fetch on the current
    /// Tokio runtime and returns true. Later calls, calls after `destroy`,
    /// and calls made outside a runtime do nothing and return false.
    pub fn init(&mut self) -> bool {
        if self.destroyed {
            tracing::warn!("AppRoot already destroyed, not fetching users");
            return false;
        }
        if self.task.is_some() || self.settled {
            tracing::debug!("AppRoot already initialized");
            return false;
        }
        if let Err(e) = Handle::try_current() {
            tracing::error!(error = %e, "AppRoot initialized outside a Tokio runtime");
            return false;
        }

        let abort = AbortHandle::new();
        let fetch = self.api.fetch_users();
        tracing::info!(url = %fetch.url(), "AppRoot initialized, fetching users");

        self.task = Some(fetch.subscribe(LogObserver, abort.listener()));
        self.abort = Some(abort);
        true
    }

    /// Progress of the startup fetch.
    pub fn state(&self) -> RootState {
        if self.settled {
            return RootState::Settled;
        }
        match &self.task {
            None => RootState::Uninitialized,
            Some(task) if task.is_finished() => RootState::Settled,
            Some(_) => RootState::Pending,
        }
    }

    /// Wait until the startup fetch has delivered its outcome or was torn
    /// down. Returns immediately if `init` was never called.
    pub async fn settled(&mut self) {
        if let Some(task) = self.task.as_mut() {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "Users fetch task did not complete");
            }
            self.task = None;
            self.settled = true;
        }
    }

    /// Tear the component down. A request still in flight is abandoned and
    /// its outcome is never delivered; `init` is refused from now on.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        if let Some(abort) = self.abort.take() {
            if self.task.as_ref().is_some_and(|t| !t.is_finished()) {
                tracing::debug!("AppRoot destroyed with fetch in flight, cancelling");
            }
            abort.trigger();
        }
        if self.task.is_some() {
            self.settled = true;
        }
    }
}

impl Drop for AppRoot {
    fn drop(&mut self) {
        self.destroy();
    }
}
