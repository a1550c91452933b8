//! Cached payloads and their TTL classes.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use syndicate_core::MenuItem;

/// Expiry bucket of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TtlClass {
    Success,
    Failure,
}

impl TtlClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for TtlClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Success/failure TTL pair for one key namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    pub success: Duration,
    pub failure: Duration,
}

impl TtlPolicy {
    pub fn new(success: Duration, failure: Duration) -> Self {
        Self { success, failure }
    }

    pub fn from_secs(success: u64, failure: u64) -> Self {
        Self::new(Duration::from_secs(success), Duration::from_secs(failure))
    }

    pub fn ttl(&self, class: TtlClass) -> Duration {
        match class {
            TtlClass::Success => self.success,
            TtlClass::Failure => self.failure,
        }
    }
}

/// A cached feed outcome.
///
/// `payload` is `None` for a cached failure. `Some` with no items is a valid
/// empty answer and must not be rendered as an error.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    payload: Option<Arc<Vec<MenuItem>>>,
    class: TtlClass,
    ttl: Duration,
    stored_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(payload: Option<Vec<MenuItem>>, class: TtlClass, policy: &TtlPolicy) -> Self {
        Self {
            payload: payload.map(Arc::new),
            class,
            ttl: policy.ttl(class),
            stored_at: Utc::now(),
        }
    }

    /// Items with the long TTL.
    pub fn success(items: Vec<MenuItem>, policy: &TtlPolicy) -> Self {
        Self::new(Some(items), TtlClass::Success, policy)
    }

    /// Failure marker with the short TTL.
    pub fn failure(policy: &TtlPolicy) -> Self {
        Self::new(None, TtlClass::Failure, policy)
    }

    pub fn payload(&self) -> Option<&[MenuItem]> {
        self.payload.as_deref().map(Vec::as_slice)
    }

    pub fn is_failure(&self) -> bool {
        self.payload.is_none()
    }

    pub fn class(&self) -> TtlClass {
        self.class
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn stored_at(&self) -> DateTime<Utc> {
        self.stored_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.ttl)
            .ok()
            .and_then(|ttl| self.stored_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> TtlPolicy {
        TtlPolicy::from_secs(3600, 900)
    }

    #[test]
    fn test_success_uses_long_ttl() {
        let entry = CacheEntry::success(vec![MenuItem::default()], &policy());

        assert_eq!(entry.ttl(), Duration::from_secs(3600));
        assert_eq!(entry.class(), TtlClass::Success);
        assert_eq!(entry.payload().map(<[MenuItem]>::len), Some(1));
    }

    #[test]
    fn test_failure_uses_short_ttl() {
        let entry = CacheEntry::failure(&policy());

        assert!(entry.is_failure());
        assert!(entry.payload().is_none());
        assert_eq!(entry.ttl(), Duration::from_secs(900));
    }

    #[test]
    fn test_empty_success_is_not_failure() {
        let entry = CacheEntry::success(Vec::new(), &policy());

        assert!(!entry.is_failure());
        assert_eq!(entry.payload(), Some(&[][..]));
    }

    #[test]
    fn test_expires_at() {
        let entry = CacheEntry::failure(&policy());
        let delta = entry.expires_at() - entry.stored_at();

        assert_eq!(delta.num_seconds(), 900);
    }
}
