//! Frontend application shell library.

pub mod api;
pub mod app;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use api::ApiClient;
pub use app::{AppRoot, Providers};
pub use config::AppConfig;
