//! The typed request configuration handed to every downstream stage.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Upper bound applied to the `count` attribute.
pub const MAX_COUNT: u32 = 100;

/// URL scheme of the feed request.
///
/// `Local` is a marker, not a wire scheme: it means the requested site is the
/// site doing the rendering. The actual request still goes over the local
/// origin's own scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
    Local,
}

impl Scheme {
    /// Parses a scheme attribute. Unknown values fall back to `http`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "https" => Self::Https,
            "local" => Self::Local,
            _ => Self::Http,
        }
    }

    /// Returns the scheme as it appears in attributes and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Local => "local",
        }
    }

    /// Returns true for the local-origin marker.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested output template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    List,
    Full,
    Headline,
    Excerpt,
    Cards,
    Json,
}

impl OutputMode {
    /// Parses an output attribute, accepting the plural spellings used by
    /// older embeds (`headlines`, `excerpts`, `card`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Some(Self::List),
            "full" => Some(Self::Full),
            "headline" | "headlines" => Some(Self::Headline),
            "excerpt" | "excerpts" => Some(Self::Excerpt),
            "cards" | "card" => Some(Self::Cards),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Returns the canonical attribute spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Full => "full",
            Self::Headline => "headline",
            Self::Excerpt => "excerpt",
            Self::Cards => "cards",
            Self::Json => "json",
        }
    }

    /// Modes that apply the category filter and category headers.
    pub fn filters_by_category(&self) -> bool {
        matches!(self, Self::List | Self::Full)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved, immutable configuration of one render call.
///
/// Produced once per invocation by the [`AttributeResolver`]. Every field has
/// a value; optional fields are `None` only when "not applied" is itself the
/// resolved value (no category filter, no count limit).
///
/// [`AttributeResolver`]: crate::AttributeResolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig {
    surface: String,
    host: String,
    path: String,
    scheme: Scheme,
    location_id: String,
    category: Option<String>,
    show_category_title: bool,
    output: OutputMode,
    offset: usize,
    count: Option<u32>,
    date_format: String,
    time_format: String,
    object: String,
    /// Only read through the fingerprint.
    cache_bust: String,
    extras: BTreeMap<String, String>,
}

impl RequestConfig {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        surface: String,
        host: String,
        path: String,
        scheme: Scheme,
        location_id: String,
        category: Option<String>,
        show_category_title: bool,
        output: OutputMode,
        offset: usize,
        count: Option<u32>,
        date_format: String,
        time_format: String,
        object: String,
        cache_bust: String,
        extras: BTreeMap<String, String>,
    ) -> Self {
        Self {
            surface,
            host,
            path,
            scheme,
            location_id,
            category,
            show_category_title,
            output,
            offset,
            count,
            date_format,
            time_format,
            object,
            cache_bust,
            extras,
        }
    }

    /// Name of the surface (shortcode) the config was resolved for.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Host (authority) of the site serving the feed.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Site path, always starting and ending with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    /// Category id filter, `None` when every category passes.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn show_category_title(&self) -> bool {
        self.show_category_title
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Effective item limit, already clamped to [`MAX_COUNT`].
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Script variable name used by the JSON output.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Extension attributes (keys outside the base schema, plus their
    /// `local_` aliases).
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    /// Returns an extension attribute by name.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    /// Returns a copy with the scheme replaced.
    ///
    /// Used once the feed target has been resolved against the known origins.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Stable hex digest of the whole configuration.
    ///
    /// Identical logical requests always produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(Sha256::digest(&bytes))
    }
}
