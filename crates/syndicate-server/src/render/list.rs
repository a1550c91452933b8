//! `list` and `full` templates: the dining menu grouped by category.

use syndicate_core::menu::DietaryFlag;
use syndicate_core::{DateRangeFormatter, MenuItem, OutputMode, RequestConfig};

use super::html;

const NOT_AVAILABLE: &str = "N/A";

pub(super) fn render(
    items: &[&MenuItem],
    config: &RequestConfig,
    dates: &DateRangeFormatter,
) -> String {
    let full = config.output() == OutputMode::Full;
    let headers = config.category().is_none() || config.show_category_title();

    let mut out = String::new();
    let mut current: Option<&str> = None;

    for item in items {
        if headers && current != Some(item.category_id.as_str()) {
            out.push_str(&format!(
                "<h4 class=\"menu-category\" id=\"categoryid-{}\">{}</h4>\n",
                html::text(&item.category_id),
                html::text(&item.category_name),
            ));
        }
        current = Some(item.category_id.as_str());

        out.push_str(&format!(
            "<div class=\"menu-item\" data-food-id=\"{}\"><span class=\"menu-item-name\">{}</span>{}",
            html::text(&item.food_id),
            html::text(item.display_title()),
            icons(item),
        ));
        if item.is_event() {
            out.push_str(&super::event_dates(item, dates));
        }
        if full {
            out.push_str(&nutrition(item));
        }
        out.push_str("</div>\n");
    }

    out
}

fn icons(item: &MenuItem) -> String {
    item.flags()
        .map(|flag: DietaryFlag| {
            format!(
                " <span class=\"menu-icon menu-icon-{}\" title=\"{}\"></span>",
                flag.slug(),
                html::text(flag.label()),
            )
        })
        .collect()
}

fn nutrition(item: &MenuItem) -> String {
    let portion = match (&item.portion_size, item.grams) {
        (Some(size), Some(g)) => format!("{} ({}g)", html::text(size), html::number(g)),
        (Some(size), None) => html::text(size),
        (None, Some(g)) => format!("({}g)", html::number(g)),
        (None, None) => NOT_AVAILABLE.to_string(),
    };

    let facts = [
        ("Portion", portion),
        ("Calories", measure(item.calories, "")),
        ("Fat", measure(item.fat, "g")),
        ("Cholesterol", measure(item.cholesterol_mg, "mg")),
        ("Sodium", measure(item.sodium_mg, "mg")),
        ("Carbs", measure(item.carbs_g, "g")),
        ("Fiber", measure(item.fiber_g, "g")),
        ("Protein", measure(item.protein_g, "g")),
        ("Potassium", measure(item.potassium_mg, "mg")),
    ];

    let rows: String = facts
        .iter()
        .map(|(label, value)| {
            format!("<li><span class=\"nutrition-label\">{label}</span> {value}</li>")
        })
        .collect();

    format!("<ul class=\"menu-nutrition\">{rows}</ul>")
}

fn measure(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |v| format!("{}{unit}", html::number(v)),
    )
}
