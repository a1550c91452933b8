//! The syndication facade: resolve, look up, fetch on miss, render.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use syndicate_core::{
    AttributeResolver, BaseDefaults, CacheScope, Hooks, MenuNormalizer, RequestConfig, Surface,
};
use syndicate_feed::{DEFAULT_FEED_PATH, FeedTarget, FetchError, MenuFeed, OriginRegistry};
use tracing::{debug, info, instrument, warn};

use crate::cache::{CacheEntry, CacheKey, InvalidationResult, MenuCache, TtlClass, TtlPolicy};
use crate::metrics::record_fetch;
use crate::render::{RenderEngine, html};
use crate::settings::{Settings, SettingsError};

/// Generation counter bumped by content-save events.
///
/// The generation is part of every fingerprinted cache key, so bumping it
/// orphans older entries until they expire.
#[derive(Debug, Default)]
pub struct LastChanged(AtomicU64);

impl LastChanged {
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Bumps the marker and returns the new generation.
    pub fn touch(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }
}

/// Orchestrates one render per call. Constructed once and shared.
pub struct MenuService {
    feed: Arc<dyn MenuFeed>,
    cache: MenuCache,
    base: BaseDefaults,
    hooks: Hooks,
    resolver: AttributeResolver,
    normalizer: MenuNormalizer,
    engine: RenderEngine,
    registry: OriginRegistry,
    surfaces: Vec<Surface>,
    feed_path: String,
    menu_ttl: TtlPolicy,
    content_ttl: TtlPolicy,
    last_changed: LastChanged,
}

impl MenuService {
    /// Creates a service with stock defaults and the `dining` and
    /// `dining_feed` surfaces.
    pub fn new(feed: Arc<dyn MenuFeed>, cache: MenuCache) -> Self {
        let mut service = Self {
            feed,
            cache,
            base: BaseDefaults::standard(),
            hooks: Hooks::new(),
            resolver: AttributeResolver::default(),
            normalizer: MenuNormalizer::default(),
            engine: RenderEngine::default(),
            registry: OriginRegistry::default(),
            surfaces: vec![Surface::dining(), Surface::dining_feed()],
            feed_path: DEFAULT_FEED_PATH.to_string(),
            menu_ttl: TtlPolicy::from_secs(3600, 900),
            content_ttl: TtlPolicy::from_secs(600, 60),
            last_changed: LastChanged::default(),
        };
        service.rebuild();
        service
    }

    /// Builds a service from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the configured origins do not parse.
    pub fn from_settings(
        settings: &Settings,
        feed: Arc<dyn MenuFeed>,
        hooks: Hooks,
    ) -> Result<Self, SettingsError> {
        let cache = MenuCache::new(settings.cache_config());
        let service = Self::new(feed, cache)
            .with_defaults(settings.base_defaults())
            .with_hooks(hooks)
            .with_registry(settings.origin_registry()?)
            .with_feed_path(settings.feed.feed_path.clone())
            .with_ttl(settings.menu_ttl(), settings.content_ttl());
        Ok(service)
    }

    pub fn with_defaults(mut self, base: BaseDefaults) -> Self {
        self.base = base;
        self.rebuild();
        self
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self.rebuild();
        self
    }

    pub fn with_registry(mut self, registry: OriginRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_feed_path(mut self, feed_path: impl Into<String>) -> Self {
        self.feed_path = feed_path.into();
        self
    }

    /// Sets the TTL pairs for per-location and fingerprinted entries.
    pub fn with_ttl(mut self, menu: TtlPolicy, content: TtlPolicy) -> Self {
        self.menu_ttl = menu;
        self.content_ttl = content;
        self
    }

    fn rebuild(&mut self) {
        self.resolver = AttributeResolver::new(self.base.clone(), self.hooks.clone());
        self.normalizer = MenuNormalizer::new(self.hooks.clone());
        self.engine = RenderEngine::new(self.hooks.clone());
    }

    pub fn surface(&self, name: &str) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.name() == name)
    }

    pub fn cache(&self) -> &MenuCache {
        &self.cache
    }

    pub fn generation(&self) -> u64 {
        self.last_changed.current()
    }

    /// Renders `surface` for the caller attributes. Always yields a fragment.
    #[instrument(skip(self, attributes), fields(surface = %surface))]
    pub async fn render_surface(&self, surface: &str, attributes: &[(String, String)]) -> String {
        let Some(surface) = self.surface(surface) else {
            warn!("Unknown surface");
            return html::comment(&format!("unknown surface {surface}"));
        };

        let config = match self.resolve(surface, attributes) {
            Ok(config) => config,
            Err(message) => return html::comment(&message),
        };

        let target = match FeedTarget::build(&config, &self.registry, &self.feed_path) {
            Ok(target) => target,
            Err(e) => {
                warn!(error = %e, "Could not build feed URL");
                return html::comment(&e.to_string());
            },
        };
        let config = config.with_scheme(target.scheme());

        let (key, policy) = match surface.cache_scope() {
            CacheScope::Location => (
                CacheKey::location(surface.name(), config.location_id()),
                &self.menu_ttl,
            ),
            CacheScope::Fingerprint => (
                CacheKey::content(surface.name(), config.fingerprint(), self.generation()),
                &self.content_ttl,
            ),
        };

        let entry = match self.cache.get(&key).await {
            Some(entry) => {
                debug!(key = %key, class = %entry.class(), "Serving cached payload");
                entry
            },
            None => self.refresh(key, &target, policy).await,
        };

        self.engine.render(entry.payload(), &config)
    }

    /// Renders the simple dining surface.
    pub async fn render_dining(&self, attributes: &[(String, String)]) -> String {
        self.render_surface("dining", attributes).await
    }

    fn resolve(
        &self,
        surface: &Surface,
        attributes: &[(String, String)],
    ) -> Result<RequestConfig, String> {
        self.resolver
            .resolve(attributes.iter().map(|(k, v)| (k, v)), surface)
            .map_err(|e| {
                warn!(error = %e, "Invalid request attributes");
                e.to_string()
            })
    }

    /// Fetches, normalizes and stores one payload. Errors end up as cache
    /// entries, never as return values.
    async fn refresh(&self, key: CacheKey, target: &FeedTarget, policy: &TtlPolicy) -> CacheEntry {
        let entry = match self.feed.fetch(target).await {
            Ok(payload) => {
                let items = self.normalizer.normalize(payload.records());
                record_fetch(if items.is_empty() { "empty" } else { "items" });
                debug!(key = %key, count = items.len(), "Feed fetched");
                CacheEntry::success(items, policy)
            },
            Err(e) if e.is_empty_result() => {
                record_fetch("empty");
                debug!(key = %key, reason = %e, "Feed returned no data");
                CacheEntry::success(Vec::new(), policy)
            },
            Err(e @ FetchError::HttpStatus(_)) => {
                record_fetch(e.outcome());
                warn!(key = %key, error = %e, "Feed answered with an error status");
                CacheEntry::new(Some(Vec::new()), TtlClass::Failure, policy)
            },
            Err(e) => {
                record_fetch(e.outcome());
                warn!(key = %key, error = %e, "Feed fetch failed");
                CacheEntry::failure(policy)
            },
        };

        self.cache.insert(key, entry).await
    }

    /// Records a content-save event.
    pub fn touch(&self) -> u64 {
        let generation = self.last_changed.touch();
        info!(generation, "Last-changed marker bumped");
        generation
    }

    pub fn invalidate_all(&self) -> u64 {
        self.cache.invalidate_all()
    }

    pub async fn invalidate_namespace(&self, namespace: &str) -> InvalidationResult {
        self.cache.invalidate_namespace(namespace).await
    }
}

impl std::fmt::Debug for MenuService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuService")
            .field("feed", &self.feed.name())
            .field("surfaces", &self.surfaces.len())
            .field("feed_path", &self.feed_path)
            .field("generation", &self.generation())
            .finish()
    }
}
