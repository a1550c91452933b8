//! Error types for request configuration.
//!
//! Configuration errors are the only failures the core produces on its own.
//! They are unrecoverable for a single render: the caller turns them into an
//! inline HTML comment and never caches them.

use thiserror::Error;

/// Errors raised while turning caller attributes into a [`RequestConfig`].
///
/// [`RequestConfig`]: crate::RequestConfig
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Neither `site` nor `host` yielded a host name.
    #[error("an empty host was supplied")]
    EmptyHost,

    /// The host/site value could not be parsed into an authority and a path.
    #[error("invalid site url '{input}': {reason}")]
    InvalidUrl {
        /// The raw value that failed to parse
        input: String,
        /// Parser message
        reason: String,
    },

    /// An attribute held a value outside its allowed set.
    #[error("invalid value '{value}' for attribute '{name}'")]
    InvalidAttribute {
        /// Attribute name
        name: String,
        /// Offending value
        value: String,
    },
}

impl ConfigError {
    /// Creates an InvalidUrl error.
    pub fn invalid_url(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an InvalidAttribute error.
    pub fn invalid_attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns true if the error is caused by a missing or unparsable host.
    pub fn is_host_error(&self) -> bool {
        matches!(self, Self::EmptyHost | Self::InvalidUrl { .. })
    }
}

/// Type alias for Results with ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
