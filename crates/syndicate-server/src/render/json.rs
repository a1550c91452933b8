//! `json` template: the full item sequence as a script assignment.

use syndicate_core::{MenuItem, RequestConfig};
use tracing::warn;

use super::html;

const DEFAULT_OBJECT: &str = "json_data";

/// Embeds every item, ignoring offset, category and count.
pub(super) fn render(items: &[MenuItem], config: &RequestConfig) -> String {
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "Failed to serialize menu items");
            return html::comment("menu items could not be serialized");
        }
    };

    format!(
        "<!-- syndicate output: json -->\n<script>var {} = {};</script>",
        object_name(config.object()),
        script_safe(&json),
    )
}

/// Reduces `raw` to a JavaScript identifier.
pub(super) fn object_name(raw: &str) -> String {
    let name: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();

    match name.chars().next() {
        Some(first) if !first.is_ascii_digit() => name,
        _ => DEFAULT_OBJECT.to_string(),
    }
}

/// Keeps serialized JSON from closing the surrounding `<script>`.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
