//! Cache key generation.

use std::fmt;

/// Key of a cached menu payload.
///
/// The string form is what namespace invalidation matches against:
/// `{surface}_{location}` for per-location entries and
/// `{surface}:{fingerprint}@{generation}` for fingerprinted entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// One entry per location, shared by every request for it.
    Location {
        surface: String,
        location_id: String,
    },
    /// One entry per distinct request, tied to a last-changed generation.
    Content {
        surface: String,
        fingerprint: String,
        generation: u64,
    },
}

impl CacheKey {
    /// Crea una key por location.
    ///
    /// # Examples
    ///
    /// ```
    /// use syndicate_server::cache::CacheKey;
    ///
    /// let key = CacheKey::location("dining", "3");
    /// assert_eq!(key.to_string(), "dining_3");
    /// ```
    pub fn location(surface: impl Into<String>, location_id: impl Into<String>) -> Self {
        Self::Location {
            surface: surface.into(),
            location_id: location_id.into(),
        }
    }

    /// Crea una key por fingerprint de request.
    pub fn content(
        surface: impl Into<String>,
        fingerprint: impl Into<String>,
        generation: u64,
    ) -> Self {
        Self::Content {
            surface: surface.into(),
            fingerprint: fingerprint.into(),
            generation,
        }
    }

    /// Retorna el namespace (nombre de la surface).
    pub fn namespace(&self) -> &str {
        match self {
            Self::Location { surface, .. } | Self::Content { surface, .. } => surface,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Location {
                surface,
                location_id,
            } => write!(f, "{surface}_{location_id}"),
            Self::Content {
                surface,
                fingerprint,
                generation,
            } => write!(f, "{surface}:{fingerprint}@{generation}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CacheKey::location("dining", "1").to_string(), "dining_1");
        assert_eq!(
            CacheKey::content("dining_feed", "abc123", 4).to_string(),
            "dining_feed:abc123@4"
        );
    }

    #[test]
    fn test_namespace() {
        assert_eq!(CacheKey::location("dining", "1").namespace(), "dining");
        assert_eq!(CacheKey::content("dining_feed", "x", 0).namespace(), "dining_feed");
    }

    #[test]
    fn test_generation_separates_keys() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(CacheKey::content("dining_feed", "abc", 1));

        assert!(set.contains(&CacheKey::content("dining_feed", "abc", 1)));
        assert!(!set.contains(&CacheKey::content("dining_feed", "abc", 2)));
    }
}
