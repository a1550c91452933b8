//! Feed URL construction and scheme resolution.

use serde::{Deserialize, Serialize};
use syndicate_core::{ConfigError, RequestConfig, Scheme};
use tracing::debug;
use url::Url;

/// Path of the menu endpoint below a site root.
pub const DEFAULT_FEED_PATH: &str = "nutrition/menu/new_menu_json.asp";

/// A site root reachable over HTTP(S).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    scheme: Scheme,
    host: String,
    path: String,
}

impl Origin {
    /// Parses an origin such as `https://www.example.edu/dining`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL has no host or a non-HTTP scheme.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw.trim()).map_err(|e| ConfigError::invalid_url(raw, e.to_string()))?;

        let scheme = match url.scheme() {
            "https" => Scheme::Https,
            "http" => Scheme::Http,
            other => return Err(ConfigError::invalid_attribute("scheme", other)),
        };
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(port)) if !h.is_empty() => format!("{h}:{port}"),
            (Some(h), None) if !h.is_empty() => h.to_string(),
            _ => return Err(ConfigError::EmptyHost),
        };
        let mut path = url.path().to_string();
        if !path.ends_with('/') {
            path.push('/');
        }

        Ok(Self { scheme, host, path })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if `host` and `path` point at this origin.
    pub fn matches(&self, host: &str, path: &str) -> bool {
        self.host.eq_ignore_ascii_case(host) && self.path == path
    }
}

/// The service's own origin plus secondary origins with a known scheme.
#[derive(Debug, Clone, Default)]
pub struct OriginRegistry {
    home: Option<Origin>,
    known: Vec<Origin>,
}

impl OriginRegistry {
    pub fn new(home: Option<Origin>, known: Vec<Origin>) -> Self {
        Self { home, known }
    }

    pub fn home(&self) -> Option<&Origin> {
        self.home.as_ref()
    }

    pub fn known(&self) -> &[Origin] {
        &self.known
    }

    /// Picks the scheme for a request.
    ///
    /// Returns `(marker, wire)`: `marker` is what renderers see and is
    /// [`Scheme::Local`] only when the request targets the home origin;
    /// `wire` is the scheme actually used on the network.
    ///
    /// 1. Home origin: marker `Local`, wire scheme of the home origin.
    /// 2. Known origin: that origin's scheme.
    /// 3. Otherwise the requested scheme, with a declared `local` sent as
    ///    plain `http`.
    pub fn resolve_scheme(&self, config: &RequestConfig) -> (Scheme, Scheme) {
        let (host, path) = (config.host(), config.path());

        if let Some(home) = self.home.as_ref().filter(|o| o.matches(host, path)) {
            return (Scheme::Local, home.scheme());
        }
        if let Some(origin) = self.known.iter().find(|o| o.matches(host, path)) {
            return (origin.scheme(), origin.scheme());
        }
        match config.scheme() {
            Scheme::Local => (Scheme::Http, Scheme::Http),
            other => (other, other),
        }
    }
}

/// A concrete feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTarget {
    url: Url,
    scheme: Scheme,
}

impl FeedTarget {
    /// Builds `{scheme}://{host}{path}{feed_path}?mLoc={loc}[&per_page={count}]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the pieces do not form a URL.
    pub fn build(
        config: &RequestConfig,
        registry: &OriginRegistry,
        feed_path: &str,
    ) -> Result<Self, ConfigError> {
        let (scheme, wire) = registry.resolve_scheme(config);

        let raw = format!(
            "{}://{}{}{}",
            wire.as_str(),
            config.host(),
            config.path(),
            feed_path.trim_start_matches('/'),
        );
        let mut url = Url::parse(&raw).map_err(|e| ConfigError::invalid_url(&raw, e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("mLoc", config.location_id());
            if let Some(count) = config.count() {
                query.append_pair("per_page", &count.to_string());
            }
        }

        debug!(url = %url, scheme = %scheme, "Feed target built");

        Ok(Self { url, scheme })
    }

    /// Wraps an already complete URL.
    pub fn from_url(url: Url) -> Self {
        let scheme = match url.scheme() {
            "https" => Scheme::Https,
            _ => Scheme::Http,
        };
        Self { url, scheme }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The scheme marker, [`Scheme::Local`] for the home origin.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn is_local(&self) -> bool {
        self.scheme.is_local()
    }
}

impl std::fmt::Display for FeedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
