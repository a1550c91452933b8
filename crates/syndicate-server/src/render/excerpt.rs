//! `excerpt` template: thumbnail, title, event dates and summary.

use syndicate_core::{DateRangeFormatter, MenuItem, RequestConfig};

use super::html;

pub(super) fn render(
    items: &[&MenuItem],
    _config: &RequestConfig,
    dates: &DateRangeFormatter,
) -> String {
    let mut out = String::from("<ul class=\"syndicate-excerpts\">\n");

    for item in items {
        let link = html::url(item.link.as_deref());
        let title = html::text(item.display_title());

        out.push_str("<li class=\"syndicate-item\">");

        if let Some(src) = html::url(item.thumbnail.as_deref()) {
            let alt = html::text(item.thumbnail_alt.as_deref().unwrap_or_default());
            let img = format!("<img src=\"{src}\" alt=\"{alt}\">");
            match &link {
                Some(href) => out.push_str(&format!(
                    "<a class=\"content-item-thumbnail\" href=\"{href}\">{img}</a>"
                )),
                None => out.push_str(&format!("<span class=\"content-item-thumbnail\">{img}</span>")),
            }
        }

        match &link {
            Some(href) => out.push_str(&format!(
                "<span class=\"content-item-title\"><a href=\"{href}\">{title}</a></span>"
            )),
            None => out.push_str(&format!("<span class=\"content-item-title\">{title}</span>")),
        }

        out.push_str(&super::event_dates(item, dates));

        if let Some(excerpt) = item.excerpt.as_deref() {
            out.push_str(&format!(
                "<span class=\"content-item-excerpt\">{}</span>",
                html::fragment(excerpt)
            ));
        }

        out.push_str("</li>\n");
    }

    out.push_str("</ul>");
    out
}
