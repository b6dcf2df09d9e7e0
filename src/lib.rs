//! Library exports for the sentiment review dashboard.
/// Session controller and reactive state.
pub mod app;
/// Application directory helpers.
pub mod app_dirs;
/// Process configuration.
pub mod config;
/// Shared HTTP client plumbing.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Backend gateway.
pub mod review_gateway;
/// Admin table projection.
pub mod review_table;
/// Client-side routes.
pub mod router;
/// Sentiment reduction rules.
pub mod sentiment;
