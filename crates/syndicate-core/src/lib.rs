//! Syndicate Core - Domain types and pipeline building blocks
//!
//! This crate holds everything in the menu syndication pipeline that does not
//! touch the network or a cache backend:
//!
//! - [`attributes`]: layered attribute defaults and the [`AttributeResolver`]
//! - [`request`]: the typed, immutable [`RequestConfig`]
//! - [`menu`]: the canonical [`MenuItem`] and the [`MenuNormalizer`]
//! - [`dates`]: the [`DateRangeFormatter`] and date format translation
//! - [`hooks`]: extension points registered by a deployment
//! - [`html`]: the one escaping rule every fragment uses

pub mod attributes;
pub mod dates;
pub mod error;
pub mod hooks;
pub mod html;
pub mod menu;
pub mod request;

pub use attributes::{AttributeResolver, AttributeSet, BaseDefaults, CacheScope, Surface};
pub use dates::{DateRangeFormatter, parse_event_time};
pub use error::{ConfigError, Result};
pub use hooks::{DefaultsHook, Hooks, ItemHook, OutputHook};
pub use menu::{MenuItem, MenuNormalizer};
pub use request::{MAX_COUNT, OutputMode, RequestConfig, Scheme};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
