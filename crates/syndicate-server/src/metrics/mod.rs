//! Metrics module for the syndication server.

pub mod cache;
pub mod feed;
pub mod http;
pub mod setup;

pub use cache::CacheMetrics;
pub use feed::record_fetch;
pub use setup::init_metrics;
