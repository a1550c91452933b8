//! Typed settings with layered precedence (file → environment).

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use syndicate_core::{BaseDefaults, Scheme};
use syndicate_feed::{DEFAULT_FEED_PATH, HttpFeedConfig, Origin, OriginRegistry};
use thiserror::Error;

use crate::cache::{CacheConfig, TtlPolicy};

const DEFAULT_CONFIG_BASENAME: &str = "syndicate";
const ENV_PREFIX: &str = "SYNDICATE";

/// Errores al cargar o validar la configuracion.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Build(#[from] config::ConfigError),

    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl SettingsError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub feed: FeedSettings,
    pub origins: OriginSettings,
    pub cache: CacheSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Host used when a request names neither `site` nor `host`.
    pub default_host: String,
    pub default_scheme: String,
    pub feed_path: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_host: "www.uams.edu".to_string(),
            default_scheme: "http".to_string(),
            feed_path: DEFAULT_FEED_PATH.to_string(),
            timeout_secs: 10,
            user_agent: concat!("syndicate-server/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OriginSettings {
    /// URL of the site this server renders for, if any.
    pub home_url: Option<String>,
    /// Secondary origins whose scheme is authoritative.
    pub known: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub max_capacity: u64,
    pub menu_success_ttl_secs: u64,
    pub menu_failure_ttl_secs: u64,
    pub content_success_ttl_secs: u64,
    pub content_failure_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            menu_success_ttl_secs: 3600,
            menu_failure_ttl_secs: 900,
            content_success_ttl_secs: 600,
            content_failure_ttl_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub time_format: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            time_format: "g:i a".to_string(),
        }
    }
}

impl Settings {
    /// Loads `syndicate.toml` (optional) or `path` (required), then
    /// `SYNDICATE_*` environment variables, e.g. `SYNDICATE_SERVER__PORT`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if a source cannot be read or the merged
    /// values fail validation.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false)),
        };

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let cache = &self.cache;
        if cache.menu_failure_ttl_secs >= cache.menu_success_ttl_secs {
            return Err(SettingsError::invalid(
                "cache.menu_failure_ttl_secs",
                "must be shorter than cache.menu_success_ttl_secs",
            ));
        }
        if cache.content_failure_ttl_secs >= cache.content_success_ttl_secs {
            return Err(SettingsError::invalid(
                "cache.content_failure_ttl_secs",
                "must be shorter than cache.content_success_ttl_secs",
            ));
        }
        if self.feed.timeout_secs == 0 {
            return Err(SettingsError::invalid("feed.timeout_secs", "must be greater than zero"));
        }
        if self.feed.default_host.trim().is_empty() {
            return Err(SettingsError::invalid("feed.default_host", "must not be empty"));
        }
        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn addr(&self) -> Result<SocketAddr, SettingsError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| SettingsError::invalid("server.host", format!("{e}")))
    }

    pub fn feed_config(&self) -> HttpFeedConfig {
        HttpFeedConfig {
            timeout: Duration::from_secs(self.feed.timeout_secs),
            user_agent: self.feed.user_agent.clone(),
        }
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_capacity: self.cache.max_capacity,
        }
    }

    /// TTL pair for per-location menu entries.
    pub fn menu_ttl(&self) -> TtlPolicy {
        TtlPolicy::from_secs(
            self.cache.menu_success_ttl_secs,
            self.cache.menu_failure_ttl_secs,
        )
    }

    /// TTL pair for fingerprinted content entries.
    pub fn content_ttl(&self) -> TtlPolicy {
        TtlPolicy::from_secs(
            self.cache.content_success_ttl_secs,
            self.cache.content_failure_ttl_secs,
        )
    }

    /// Base attribute defaults with the configured host, scheme and time
    /// format.
    pub fn base_defaults(&self) -> BaseDefaults {
        BaseDefaults::standard()
            .with("host", self.feed.default_host.clone())
            .with("scheme", Scheme::parse(&self.feed.default_scheme).as_str())
            .with("time_format", self.render.time_format.clone())
    }

    /// Parses the configured origins.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] if an origin is not an http(s) URL.
    pub fn origin_registry(&self) -> Result<OriginRegistry, SettingsError> {
        let home = self
            .origins
            .home_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(Origin::parse)
            .transpose()
            .map_err(|e| SettingsError::invalid("origins.home_url", e.to_string()))?;

        let known = self
            .origins
            .known
            .iter()
            .map(|url| Origin::parse(url))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SettingsError::invalid("origins.known", e.to_string()))?;

        Ok(OriginRegistry::new(home, known))
    }
}
