//! Error types for feed access.

/// Outcome of a feed request that did not produce records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network, DNS or timeout failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("upstream returned HTTP {0}")]
    HttpStatus(u16),

    /// The body was not decodable as a feed payload.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// A valid answer that carries no data.
    #[error("empty payload")]
    EmptyBody,
}

impl FetchError {
    /// Creates a new transport error.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport(reason.into())
    }

    /// Creates a new malformed payload error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }

    /// Returns true if the upstream answered "no data" rather than failing.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyBody | Self::HttpStatus(404))
    }

    /// Short label for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::HttpStatus(_) => "status",
            Self::Malformed(_) => "malformed",
            Self::EmptyBody => "empty",
        }
    }
}
