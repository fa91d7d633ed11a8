//! Backend API subsystem.
//!
//! # Data Flow
//! ```text
//! ApiClient (base address injected at startup)
//!     → client.rs (build endpoint URL)
//!     → request.rs (cold Fetch, activated by run/subscribe)
//!     → error.rs (single "request failed" kind)
//! ```
//!
//! # Design Decisions
//! - Payloads are opaque JSON; no schema is enforced
//! - No retries, caching or deduplication
//! - Cancellation is explicit: subscriptions take an abort receiver

pub mod client;
pub mod error;
pub mod request;

pub use client::ApiClient;
pub use error::ApiError;
pub use request::{Fetch, Observer};
