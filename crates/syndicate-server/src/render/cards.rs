//! `cards` template.

use chrono::{DateTime, Local, TimeZone};
use syndicate_core::dates::format_datetime;
use syndicate_core::{DateRangeFormatter, MenuItem, RequestConfig, parse_event_time};

use super::html;

pub(super) fn render(
    items: &[&MenuItem],
    _config: &RequestConfig,
    dates: &DateRangeFormatter,
) -> String {
    let mut out = String::from("<div class=\"syndicate-cards\">\n");

    for item in items {
        let link = html::url(item.link.as_deref());

        out.push_str("<div class=\"default-card\">");

        if let Some(src) = html::url(item.image.as_deref()) {
            out.push_str(&format!(
                "<div class=\"card-image\"><img src=\"{src}\" alt=\"{}\"></div>",
                html::text(item.image_caption.as_deref().unwrap_or_default()),
            ));
        }

        out.push_str("<div class=\"card-body\">");

        let title = html::text(item.display_title());
        match &link {
            Some(href) => out.push_str(&format!("<h3><a href=\"{href}\" class=\"pic-title\">{title}</a></h3>")),
            None => out.push_str(&format!("<h3>{title}</h3>")),
        }

        out.push_str("<span class=\"card-text\">");
        out.push_str(&super::event_dates(item, dates));
        if let Some(excerpt) = item.excerpt.as_deref() {
            out.push_str(&html::fragment(excerpt));
        }
        out.push_str("</span>");

        if let Some(href) = &link {
            out.push_str(&format!("<a href=\"{href}\" class=\"pic-text-more\">Read more</a>"));
        }
        if let Some(author) = item.author_name.as_deref() {
            out.push_str(&format!(
                "<span class=\"content-item-byline-author\">{}</span>",
                html::text(author)
            ));
        }
        for (prop, raw) in [("datePublished", &item.date), ("dateModified", &item.modified)] {
            if let Some(iso) = raw.as_deref().and_then(iso_date) {
                out.push_str(&format!("<meta itemprop=\"{prop}\" content=\"{iso}\"/>"));
            }
        }

        out.push_str("</div></div>\n");
    }

    out.push_str("</div>");
    out
}

/// Normalizes a publication date to ISO 8601, or `None` if unreadable.
fn iso_date(raw: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(format_datetime("c", &dt));
    }
    let naive = parse_event_time(raw)?;
    let local = Local.from_local_datetime(&naive).earliest()?;
    Some(format_datetime("c", &local))
}
