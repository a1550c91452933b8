//! Menu feed trait definition.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::payload::RawPayload;
use crate::target::FeedTarget;

/// A source of raw menu records.
///
/// The server only talks to this trait, so tests and alternative transports
/// can stand in for the HTTP implementation.
///
/// # Implementors
///
/// - `HttpFeed` - Fetches the feed over HTTP(S)
#[async_trait]
pub trait MenuFeed: Send + Sync {
    /// Fetches and classifies the feed at `target`.
    ///
    /// # Errors
    ///
    /// - `FetchError::Transport` if the request could not complete
    /// - `FetchError::HttpStatus` for a non-success status other than 404
    /// - `FetchError::Malformed` if the body is not a JSON array
    /// - `FetchError::EmptyBody` for a valid "no data" answer
    async fn fetch(&self, target: &FeedTarget) -> Result<RawPayload, FetchError>;

    /// Returns the name of this feed, for logging.
    fn name(&self) -> &str;
}
