//! OS signal handling.

/// Resolve when the process receives Ctrl-C (SIGINT).
///
/// If the handler cannot be installed this never resolves, so the caller
/// keeps waiting on its other branches.
pub async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
