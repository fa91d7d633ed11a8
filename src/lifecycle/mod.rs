//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     AppConfig → Providers → AppRoot::new → AppRoot::init
//!
//! Run:
//!     wait for the startup fetch to settle, or Ctrl-C (signals.rs)
//!
//! Teardown:
//!     AppRoot::destroy → AbortHandle::trigger (abort.rs) → pending fetch dropped
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Teardown is deterministic; no callback fires after destroy

pub mod abort;
pub mod signals;
pub mod startup;

pub use abort::AbortHandle;
