//! Turns caller attributes into a [`RequestConfig`].

use std::collections::BTreeMap;

use tracing::{debug, warn};
use url::Url;

use super::{AttributeSet, BaseDefaults, Surface};
use crate::error::{ConfigError, Result};
use crate::hooks::Hooks;
use crate::request::{MAX_COUNT, OutputMode, RequestConfig, Scheme};

/// Prefix of the alias every extension attribute receives.
pub const LOCAL_PREFIX: &str = "local_";

/// Merges layered defaults with caller attributes.
///
/// The resolver is constructed once and shared; resolving is a pure function
/// of its inputs, so identical calls yield identical configs.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use syndicate_core::{AttributeResolver, OutputMode, Surface};
///
/// let resolver = AttributeResolver::default();
/// let atts = HashMap::from([("loc".to_string(), "3".to_string())]);
///
/// let config = resolver.resolve(&atts, &Surface::dining()).unwrap();
/// assert_eq!(config.location_id(), "3");
/// assert_eq!(config.output(), OutputMode::List);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeResolver {
    base: BaseDefaults,
    hooks: Hooks,
}

impl AttributeResolver {
    pub fn new(base: BaseDefaults, hooks: Hooks) -> Self {
        Self { base, hooks }
    }

    pub fn base(&self) -> &BaseDefaults {
        &self.base
    }

    /// Builds the full default set for a surface, before caller values.
    ///
    /// Order: base, defaults hooks, surface overrides (known keys only),
    /// surface extensions, then a `local_` alias for every key outside the
    /// base schema.
    pub fn defaults_for(&self, surface: &Surface) -> AttributeSet {
        let mut defaults = self.base.attributes().clone();
        self.hooks.apply_defaults(&mut defaults);
        defaults.overlay_known(surface.local_defaults().iter());
        defaults.extend_from(surface.extended());

        let aliases: AttributeSet = defaults
            .iter()
            .filter(|(key, _)| !self.base.contains(key))
            .map(|(key, value)| (format!("{LOCAL_PREFIX}{key}"), value.to_string()))
            .collect();
        defaults.extend_from(&aliases);

        defaults
    }

    /// Applies caller attributes over the surface defaults.
    ///
    /// Caller keys are matched case-insensitively; keys unknown to every
    /// defaults layer are dropped.
    pub fn resolve_attributes<K, V>(
        &self,
        caller: impl IntoIterator<Item = (K, V)>,
        surface: &Surface,
    ) -> AttributeSet
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut attributes = self.defaults_for(surface);
        attributes.overlay_known(
            caller
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.as_ref().to_string())),
        );
        attributes
    }

    /// Resolves caller attributes into a typed config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when neither `site` nor `host` parses into a
    /// host and path.
    pub fn resolve<K, V>(
        &self,
        caller: impl IntoIterator<Item = (K, V)>,
        surface: &Surface,
    ) -> Result<RequestConfig>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let attributes = self.resolve_attributes(caller, surface);
        self.to_config(&attributes, surface)
    }

    fn to_config(&self, atts: &AttributeSet, surface: &Surface) -> Result<RequestConfig> {
        let site = atts.non_empty("site").or_else(|| atts.non_empty("host"));
        let site = parse_site(site.unwrap_or_default())?;

        let scheme = site
            .scheme
            .unwrap_or_else(|| Scheme::parse(atts.get("scheme").unwrap_or_default()));

        let location_id = atts.non_empty("loc").unwrap_or("1").to_string();

        let category = atts
            .non_empty("cat")
            .or_else(|| atts.non_empty("category"))
            .map(str::to_string);

        let output = self.output_mode(atts, surface);

        let offset = usize::try_from(absint(atts.get("offset").unwrap_or_default())).unwrap_or(0);
        let count = match absint(atts.get("count").unwrap_or_default()) {
            0 => None,
            n => Some(u32::try_from(n.min(u64::from(MAX_COUNT))).unwrap_or(MAX_COUNT)),
        };

        let extras: BTreeMap<String, String> = atts
            .iter()
            .filter(|(key, _)| !self.base.contains(key))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let config = RequestConfig::new(
            surface.name().to_string(),
            site.host,
            site.path,
            scheme,
            location_id,
            category,
            is_truthy(atts.get("title").unwrap_or_default()),
            output,
            offset,
            count,
            atts.get("date_format").unwrap_or_default().to_string(),
            atts.get("time_format").unwrap_or_default().to_string(),
            atts.get("object").unwrap_or("json_data").to_string(),
            atts.get("cache_bust").unwrap_or_default().to_string(),
            extras,
        );

        debug!(
            surface = %config.surface(),
            host = %config.host(),
            location = %config.location_id(),
            output = %config.output(),
            "Attributes resolved"
        );

        Ok(config)
    }

    /// `type` is the legacy spelling of `output` on surfaces that extend it.
    fn output_mode(&self, atts: &AttributeSet, surface: &Surface) -> OutputMode {
        let requested = atts
            .non_empty("type")
            .or_else(|| atts.non_empty("output"))
            .unwrap_or_default();

        OutputMode::parse(requested).unwrap_or_else(|| {
            let fallback = surface
                .local_defaults()
                .get("output")
                .or_else(|| self.base.attributes().get("output"))
                .and_then(OutputMode::parse)
                .unwrap_or_default();
            warn!(requested = %requested, fallback = %fallback, "Unknown output mode");
            fallback
        })
    }
}

#[derive(Debug)]
struct SiteUrl {
    host: String,
    path: String,
    scheme: Option<Scheme>,
}

/// Splits a `host` or `site` attribute into authority and path.
fn parse_site(raw: &str) -> Result<SiteUrl> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::EmptyHost);
    }

    let (explicit, candidate) = match raw.split_once("://") {
        Some((scheme, _)) => (Some(scheme.to_ascii_lowercase()), raw.to_string()),
        None => (None, format!("http://{raw}")),
    };

    let url = Url::parse(&candidate).map_err(|e| match e {
        url::ParseError::EmptyHost => ConfigError::EmptyHost,
        other => ConfigError::invalid_url(raw, other.to_string()),
    })?;

    let host = match url.host_str() {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => return Err(ConfigError::EmptyHost),
    };
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host,
    };

    let mut path = url.path().to_string();
    if !path.ends_with('/') {
        path.push('/');
    }

    let scheme = match explicit.as_deref() {
        Some("https") => Some(Scheme::Https),
        Some("http") => Some(Scheme::Http),
        Some(other) => return Err(ConfigError::invalid_attribute("scheme", other)),
        None => None,
    };

    Ok(SiteUrl { host, path, scheme })
}

/// Absolute integer value of a numeric attribute; anything else is zero.
fn absint(value: &str) -> u64 {
    value
        .trim()
        .parse::<i64>()
        .map(i64::unsigned_abs)
        .unwrap_or(0)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
