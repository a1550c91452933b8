//! `headline` template: linked titles only.

use syndicate_core::{DateRangeFormatter, MenuItem, RequestConfig};

use super::html;

pub(super) fn render(
    items: &[&MenuItem],
    _config: &RequestConfig,
    _dates: &DateRangeFormatter,
) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            let title = html::text(item.display_title());
            match html::url(item.link.as_deref()) {
                Some(href) => format!("<li class=\"syndicate-item\"><a href=\"{href}\">{title}</a></li>\n"),
                None => format!("<li class=\"syndicate-item\">{title}</li>\n"),
            }
        })
        .collect();

    format!("<ul class=\"syndicate-headlines\">\n{rows}</ul>")
}
