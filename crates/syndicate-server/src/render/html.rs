//! Escaping helpers shared by the HTML templates.

use url::Url;

/// Escapes text for element content or a quoted attribute. Same rule as
/// the date markup built in `syndicate-core`.
pub fn text(raw: &str) -> String {
    syndicate_core::html::escape(raw)
}

/// Sanitizes an upstream HTML fragment, keeping safe markup.
pub fn fragment(raw: &str) -> String {
    ammonia::clean(raw)
}

/// Returns an escaped URL if `raw` is an absolute http(s) URL.
pub fn url(raw: Option<&str>) -> Option<String> {
    let parsed = Url::parse(raw?.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| text(parsed.as_str()))
}

/// An HTML comment carrying `message`. `--` cannot close it early.
pub fn comment(message: &str) -> String {
    format!("<!-- syndicate: {} -->", message.replace("--", "- -").replace('>', "&gt;"))
}

/// Formats a nutrition number without a trailing `.0`.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
