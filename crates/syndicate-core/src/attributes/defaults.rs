//! Base defaults and per-surface overrides.

use super::AttributeSet;

/// The base attribute schema shared by every surface.
///
/// Keys present here are the canonical attributes. Anything a surface adds
/// on top is an extension attribute and also gets a `local_` alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDefaults {
    attributes: AttributeSet,
}

impl BaseDefaults {
    /// Returns the stock defaults.
    pub fn standard() -> Self {
        Self {
            attributes: AttributeSet::from_pairs([
                ("object", "json_data"),
                ("output", "json"),
                ("host", "www.uams.edu"),
                ("scheme", "http"),
                ("site", ""),
                ("category", ""),
                ("loc", "1"),
                ("cat", ""),
                ("title", ""),
                ("count", ""),
                ("offset", "0"),
                ("date_format", "F j, Y"),
                ("time_format", "g:i a"),
                ("cache_bust", ""),
            ]),
        }
    }

    /// Replaces the default of a base key. Keys outside the base schema are
    /// ignored so the schema itself can't grow through this call.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.overlay_known([(key, value.into())]);
        self
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }
}

impl Default for BaseDefaults {
    fn default() -> Self {
        Self::standard()
    }
}

/// How results of a surface are keyed in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheScope {
    /// One slot per location id (`dining_{loc}`).
    Location,
    /// One slot per attribute fingerprint within the surface namespace.
    Fingerprint,
}

/// An embedding context with its own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    name: String,
    local_defaults: AttributeSet,
    extended: AttributeSet,
    cache_scope: CacheScope,
}

impl Surface {
    pub fn new(name: impl Into<String>, cache_scope: CacheScope) -> Self {
        Self {
            name: name.into(),
            local_defaults: AttributeSet::new(),
            extended: AttributeSet::new(),
            cache_scope,
        }
    }

    /// The simple menu surface: list output, cached per location.
    pub fn dining() -> Self {
        Self::new("dining", CacheScope::Location)
            .with_default("output", "list")
            .with_extended("type", "")
    }

    /// The multi-format syndication surface, cached per attribute set.
    pub fn dining_feed() -> Self {
        Self::new("dining_feed", CacheScope::Fingerprint).with_extended("period", "")
    }

    /// Overrides the default of a base attribute for this surface only.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.local_defaults.insert(key, value);
        self
    }

    /// Adds an attribute outside the base schema.
    pub fn with_extended(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extended.insert(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn local_defaults(&self) -> &AttributeSet {
        &self.local_defaults
    }

    pub fn extended(&self) -> &AttributeSet {
        &self.extended
    }

    pub fn cache_scope(&self) -> CacheScope {
        self.cache_scope
    }
}
