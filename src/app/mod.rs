//! Application shell.
//!
//! # Data Flow
//! ```text
//! AppConfig
//!     → providers.rs (Router + ApiClient, built explicitly)
//!     → root.rs (AppRoot::new → init → one users fetch)
//!     → LogObserver (payload or error to the log)
//! ```
//!
//! # Design Decisions
//! - No global registry: providers are constructed and passed by value
//! - The root owns the abort handle of its fetch and fires it on teardown
//! - The title signal is read-only from outside the root

pub mod providers;
pub mod root;
pub mod signal;

pub use providers::Providers;
pub use root::{AppRoot, LogObserver, RootState};
pub use signal::Signal;
