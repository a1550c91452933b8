//! # Syndicate Feed
//!
//! Remote access to the dining-menu feed.
//!
//! This crate turns a resolved [`RequestConfig`](syndicate_core::RequestConfig)
//! into a concrete feed URL, fetches it over HTTP and classifies the outcome
//! into either raw records or a [`FetchError`].
//!
//! ## Example
//!
//! ```ignore
//! use syndicate_feed::{FeedTarget, HttpFeed, HttpFeedConfig, MenuFeed, OriginRegistry};
//!
//! let feed = HttpFeed::new(HttpFeedConfig::default())?;
//! let target = FeedTarget::build(&config, &OriginRegistry::default(), DEFAULT_FEED_PATH)?;
//! let payload = feed.fetch(&target).await?;
//! ```

pub mod error;
pub mod http;
pub mod payload;
pub mod source;
pub mod target;

pub use error::FetchError;
pub use http::{HttpFeed, HttpFeedConfig};
pub use payload::{RawPayload, classify};
pub use source::MenuFeed;
pub use target::{DEFAULT_FEED_PATH, FeedTarget, Origin, OriginRegistry};

// Re-export syndicate_core for consumers
pub use syndicate_core;
