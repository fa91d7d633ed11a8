//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - Each request carries a UUID v4 request id in its span
//! - Log level from config, overridable with RUST_LOG

pub mod logging;

pub use logging::init_logging;
