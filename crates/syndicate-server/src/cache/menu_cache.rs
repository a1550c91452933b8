//! Menu payload cache using Moka.

use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache;
use moka::notification::RemovalCause;
use syndicate_core::MenuItem;
use tracing::debug;

use crate::cache::entry::{CacheEntry, TtlClass, TtlPolicy};
use crate::cache::keys::CacheKey;
use crate::metrics::CacheMetrics;

/// Configuracion del cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximo numero de entries (default: 10000)
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

/// Expira cada entry segun su propio TTL.
struct EntryExpiry;

impl Expiry<CacheKey, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &CacheKey,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl())
    }

    // Un put sobre una key existente reinicia el TTL con la clase nueva.
    fn expire_after_update(
        &self,
        _key: &CacheKey,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl())
    }
}

/// Cache de menus usando Moka.
/// Thread-safe y async-friendly.
///
/// Concurrent misses on one key are not coalesced: each caller fetches and
/// the last `put` wins.
///
/// # Examples
///
/// ```no_run
/// use syndicate_server::cache::{CacheConfig, CacheKey, MenuCache, TtlPolicy};
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = MenuCache::new(CacheConfig::default());
/// let key = CacheKey::location("dining", "1");
///
/// cache.put(key.clone(), Some(Vec::new()), &TtlPolicy::from_secs(3600, 900)).await;
/// assert!(cache.get(&key).await.is_some());
/// # }
/// ```
#[derive(Clone)]
pub struct MenuCache {
    inner: Cache<CacheKey, CacheEntry>,
    metrics: CacheMetrics,
}

impl MenuCache {
    /// Crea un nuevo cache con la configuracion dada.
    pub fn new(config: CacheConfig) -> Self {
        let metrics = CacheMetrics::new();

        let eviction_metrics = metrics.clone();
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryExpiry)
            .eviction_listener(move |_key, _value, cause| {
                let reason = match cause {
                    RemovalCause::Expired => "ttl",
                    RemovalCause::Size => "capacity",
                    RemovalCause::Explicit => "manual",
                    RemovalCause::Replaced => "replaced",
                };
                eviction_metrics.record_eviction(reason);
            })
            .build();

        Self { inner, metrics }
    }

    /// Obtiene una entry si existe y no expiro.
    pub async fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        let start = Instant::now();
        let result = self.inner.get(key).await;

        if result.is_some() {
            self.metrics.record_hit();
        } else {
            self.metrics.record_miss();
        }

        self.metrics.record_operation_duration("get", start.elapsed());
        self.update_entry_gauge();

        result
    }

    /// Guarda un payload eligiendo el TTL por su forma: `Some` usa el TTL
    /// largo, `None` el corto.
    pub async fn put(
        &self,
        key: CacheKey,
        payload: Option<Vec<MenuItem>>,
        policy: &TtlPolicy,
    ) -> CacheEntry {
        let class = if payload.is_some() {
            TtlClass::Success
        } else {
            TtlClass::Failure
        };
        self.insert(key, CacheEntry::new(payload, class, policy)).await
    }

    /// Inserta una entry ya construida.
    pub async fn insert(&self, key: CacheKey, entry: CacheEntry) -> CacheEntry {
        let start = Instant::now();

        debug!(
            key = %key,
            class = %entry.class(),
            ttl_secs = entry.ttl().as_secs(),
            "Cache entry stored"
        );
        self.inner.insert(key, entry.clone()).await;

        self.metrics.record_operation_duration("put", start.elapsed());
        self.update_entry_gauge();

        entry
    }

    /// Invalida una entrada especifica.
    pub async fn invalidate(&self, key: &CacheKey) {
        self.inner.invalidate(key).await;
    }

    /// Invalida todas las entradas y retorna cuantas habia.
    pub fn invalidate_all(&self) -> u64 {
        let count = self.inner.entry_count();
        self.inner.invalidate_all();
        count
    }

    /// Retorna el numero aproximado de entries en cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Itera sobre todas las entries del cache.
    /// Nota: Esta es una snapshot, entries pueden cambiar durante iteracion.
    pub fn iter(&self) -> impl Iterator<Item = (Arc<CacheKey>, CacheEntry)> + '_ {
        self.inner.iter()
    }

    /// Actualiza el gauge de entry count.
    fn update_entry_gauge(&self) {
        self.metrics.update_entry_count(self.inner.entry_count());
    }

    /// Fuerza la limpieza de entries expiradas.
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

impl Default for MenuCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
