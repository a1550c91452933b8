//! Cache invalidation with pattern matching support.

use glob::Pattern;
use tracing::{debug, info};

use crate::cache::{CacheKey, MenuCache};

/// Resultado de una operación de invalidación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationResult {
    /// Número de entries invalidadas.
    pub count: usize,
    /// Patrones aplicados.
    pub patterns: Vec<String>,
}

impl MenuCache {
    /// Invalida todas las entradas de un namespace (una surface).
    ///
    /// Cubre tanto las keys por location (`dining_*`) como las keys por
    /// fingerprint (`dining_feed:*`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use syndicate_server::cache::MenuCache;
    /// # #[tokio::main]
    /// # async fn main() {
    /// # let cache = MenuCache::default();
    /// let result = cache.invalidate_namespace("dining").await;
    /// println!("Invalidated {} entries", result.count);
    /// # }
    /// ```
    pub async fn invalidate_namespace(&self, namespace: &str) -> InvalidationResult {
        let escaped = Pattern::escape(namespace);
        let patterns = [format!("{escaped}_*"), format!("{escaped}:*")];

        let mut count = 0;
        for key in self.matching_keys(&patterns, |key| key.namespace() == namespace) {
            self.invalidate(&key).await;
            count += 1;
        }

        info!(namespace = %namespace, count, "Cache namespace invalidated");

        InvalidationResult {
            count,
            patterns: patterns.to_vec(),
        }
    }

    /// Recolecta las keys cuyo texto coincide con algun patron y que
    /// pasan `filter`.
    fn matching_keys(
        &self,
        patterns: &[String],
        filter: impl Fn(&CacheKey) -> bool,
    ) -> Vec<CacheKey> {
        let compiled: Vec<Pattern> = patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    debug!(pattern = %p, error = %e, "Invalid glob pattern");
                    None
                }
            })
            .collect();

        self.iter()
            .filter(|(key, _)| {
                let key_str = key.to_string();
                compiled.iter().any(|p| p.matches(&key_str)) && filter(key)
            })
            .map(|(key, _)| (*key).clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlPolicy;

    async fn seeded() -> MenuCache {
        let cache = MenuCache::default();
        let policy = TtlPolicy::from_secs(3600, 900);

        for loc in ["1", "2", "3"] {
            cache
                .put(CacheKey::location("dining", loc), Some(Vec::new()), &policy)
                .await;
        }
        for fp in ["aaa", "bbb"] {
            cache
                .put(CacheKey::content("dining_feed", fp, 0), Some(Vec::new()), &policy)
                .await;
        }
        cache.sync().await;
        cache
    }

    #[tokio::test]
    async fn test_invalidate_namespace() {
        let cache = seeded().await;

        let result = cache.invalidate_namespace("dining").await;

        assert_eq!(result.count, 3);
        assert!(cache.get(&CacheKey::location("dining", "1")).await.is_none());
        // `dining_*` must not swallow the dining_feed namespace
        assert!(
            cache
                .get(&CacheKey::content("dining_feed", "aaa", 0))
                .await
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_invalidate_content_namespace() {
        let cache = seeded().await;

        let result = cache.invalidate_namespace("dining_feed").await;

        assert_eq!(result.count, 2);
        assert!(cache.get(&CacheKey::location("dining", "2")).await.is_some());
    }

    #[tokio::test]
    async fn test_unknown_namespace() {
        let cache = seeded().await;
        assert_eq!(cache.invalidate_namespace("events").await.count, 0);
    }
}
