use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered string-to-string attribute map.
///
/// Iteration order is insertion order so that anything derived from the map
/// (logs, fingerprints) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(flatten)]
    inner: IndexMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from string pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            inner: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Returns the value for `key` when present and not blank.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Overwrites values of keys this set already knows; unknown keys in
    /// `overlay` are dropped.
    ///
    /// This is the allow-list merge applied to surface defaults and to caller
    /// attributes.
    pub fn overlay_known<K, V>(&mut self, overlay: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in overlay {
            if let Some(slot) = self.inner.get_mut(key.as_ref()) {
                *slot = value.into();
            }
        }
    }

    /// Adds every pair of `other`, overwriting existing keys.
    pub fn extend_from(&mut self, other: &AttributeSet) {
        for (key, value) in &other.inner {
            self.inner.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_known_drops_unknown_keys() {
        let mut base = AttributeSet::from_pairs([("a", "1"), ("b", "2")]);
        base.overlay_known([("b", "3"), ("c", "4")]);

        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("3"));
        assert!(!base.contains_key("c"));
    }

    #[test]
    fn test_extend_adds_and_overwrites() {
        let mut base = AttributeSet::from_pairs([("a", "1"), ("b", "2")]);
        base.extend_from(&AttributeSet::from_pairs([("b", "3"), ("c", "4")]));

        assert_eq!(base.get("b"), Some("3"));
        assert_eq!(base.get("c"), Some("4"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_non_empty_trims() {
        let set = AttributeSet::from_pairs([("a", "  "), ("b", " x ")]);

        assert_eq!(set.non_empty("a"), None);
        assert_eq!(set.non_empty("b"), Some("x"));
        assert_eq!(set.non_empty("missing"), None);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let set = AttributeSet::from_pairs([("z", "1"), ("a", "2"), ("m", "3")]);
        let keys: Vec<_> = set.keys().collect();

        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
