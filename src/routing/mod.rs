//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! RouteConfig[] (from AppConfig, empty by default)
//!     → router.rs (normalize and freeze)
//!     → Router::resolve(path) → matched Route or None
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable at runtime
//! - Exact path lookup; a trailing '/' is ignored
//! - Explicit None rather than a silent default route

pub mod router;

pub use router::{Route, Router};
