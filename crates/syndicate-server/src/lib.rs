//! Syndicate Server - menu syndication over HTTP
//!
//! Wires the pipeline together behind [`MenuService`]: attribute resolution
//! and normalization from `syndicate-core`, feed access from
//! `syndicate-feed`, plus the [`cache`], [`render`] and HTTP layers that live
//! here.

pub mod cache;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod render;
pub mod server;
pub mod service;
pub mod settings;
pub mod state;

pub use cache::{CacheConfig, CacheEntry, CacheKey, MenuCache, TtlClass, TtlPolicy};
pub use render::RenderEngine;
pub use server::{create_router, run_server};
pub use service::{LastChanged, MenuService};
pub use settings::{Settings, SettingsError};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_defined() {
        assert!(!version().is_empty());
    }
}
