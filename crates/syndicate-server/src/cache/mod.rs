//! Cache module for the syndication server.
//!
//! A Moka cache holding normalized menu payloads. Every entry carries its
//! own TTL so successes and failures can share one store while expiring on
//! different schedules.

pub mod entry;
pub mod invalidation;
pub mod keys;
pub mod menu_cache;

// Re-exports
pub use entry::{CacheEntry, TtlClass, TtlPolicy};
pub use invalidation::InvalidationResult;
pub use keys::CacheKey;
pub use menu_cache::{CacheConfig, MenuCache};
