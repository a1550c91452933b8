//! Raw feed records to [`MenuItem`]s.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use super::MenuItem;
use crate::dates::parse_event_time;
use crate::hooks::Hooks;

/// Maps raw upstream records into canonical menu items.
///
/// Field values are copied verbatim; only the dietary booleans are derived.
/// A flag is set exactly when the upstream value is the string `"True"`:
/// absent fields, `"true"`, JSON `true` and anything else count as false.
///
/// Each item gets an ordering key from its `date` field (or the current time
/// when the record has none). When two records share a second, the later one
/// is moved forward one second at a time until the key is free, so no record
/// is dropped. Colliding records therefore keep feed order rather than true
/// chronological order.
#[derive(Debug, Clone, Default)]
pub struct MenuNormalizer {
    hooks: Hooks,
}

impl MenuNormalizer {
    pub fn new(hooks: Hooks) -> Self {
        Self { hooks }
    }

    /// Normalizes records using the current time as fallback ordering key.
    pub fn normalize(&self, records: &[Value]) -> Vec<MenuItem> {
        self.normalize_at(records, Local::now().timestamp())
    }

    /// Normalizes records with an explicit fallback timestamp.
    pub fn normalize_at(&self, records: &[Value], now: i64) -> Vec<MenuItem> {
        let mut by_key: IndexMap<i64, MenuItem> = IndexMap::with_capacity(records.len());

        for record in records {
            if !record.is_object() {
                debug!(record = %record, "Skipping non-object feed record");
                continue;
            }

            let item = self.hooks.rewrite_item(item_from_record(record), record);

            let mut key = text(record, "date")
                .and_then(|d| parse_timestamp(&d))
                .unwrap_or(now);
            while by_key.contains_key(&key) {
                key += 1;
            }

            by_key.insert(key, MenuItem { order_key: key, ..item });
        }

        debug!(records = records.len(), items = by_key.len(), "Feed normalized");

        by_key.into_values().collect()
    }
}

fn item_from_record(record: &Value) -> MenuItem {
    MenuItem {
        order_key: 0,
        food_id: text(record, "FoodID").unwrap_or_default(),
        food_name: text(record, "Food").unwrap_or_default(),
        category_id: text(record, "CategoryID").unwrap_or_default(),
        category_name: text(record, "Category").unwrap_or_default(),
        heart_healthy: flag(record, "HeartHealthy"),
        vegetarian: flag(record, "Vegetarian"),
        spicy: flag(record, "Spicy"),
        gluten_free: flag(record, "GlutenFree"),
        nut_allergy: flag(record, "Nut"),
        soy_allergy: flag(record, "Soy"),
        dairy_allergy: flag(record, "Dairy"),
        seafood: flag(record, "Seafood"),
        portion_size: text(record, "PortionSize"),
        grams: number(record, "Grams"),
        calories: number(record, "Calories"),
        fat: number(record, "Fat"),
        cholesterol_mg: number(record, "Cholesterol"),
        sodium_mg: number(record, "Sodium"),
        carbs_g: number(record, "Carbs"),
        fiber_g: number(record, "Fiber"),
        protein_g: number(record, "Protein"),
        potassium_mg: number(record, "Potassium"),
        event_begin: text(record, "event_begin").and_then(|v| parse_event_time(&v)),
        event_end: text(record, "event_end").and_then(|v| parse_event_time(&v)),
        event_address: text(record, "event_address"),
        title: text(record, "title"),
        link: text(record, "link"),
        excerpt: text(record, "excerpt"),
        thumbnail: text(record, "thumbnail"),
        thumbnail_alt: text(record, "thumbalt"),
        image: text(record, "image"),
        image_caption: text(record, "imagecaption"),
        author_name: text(record, "author_name"),
        date: text(record, "date"),
        modified: text(record, "modified"),
    }
}

/// Reads a field as text. Numbers are stringified, blank strings are absent,
/// and REST-style `{"rendered": "..."}` wrappers are unwrapped.
fn text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(obj) => obj
            .get("rendered")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
        _ => None,
    }
}

fn flag(record: &Value, key: &str) -> bool {
    record.get(key).and_then(Value::as_str) == Some("True")
}

fn number(record: &Value, key: &str) -> Option<f64> {
    match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Parses a record date into a Unix timestamp, reading naive values as
/// local time.
fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp());
    }
    parse_event_time(raw).map(local_timestamp)
}

fn local_timestamp(naive: NaiveDateTime) -> i64 {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| naive.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flag_requires_exact_true_string() {
        let record = json!({
            "HeartHealthy": "True",
            "Vegetarian": "true",
            "Spicy": true,
            "GlutenFree": "False",
        });

        assert!(flag(&record, "HeartHealthy"));
        assert!(!flag(&record, "Vegetarian"));
        assert!(!flag(&record, "Spicy"));
        assert!(!flag(&record, "GlutenFree"));
        assert!(!flag(&record, "Seafood"));
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let record = json!({"Calories": "250", "Fat": 9.5, "Fiber": "", "Sodium": "n/a"});

        assert_eq!(number(&record, "Calories"), Some(250.0));
        assert_eq!(number(&record, "Fat"), Some(9.5));
        assert_eq!(number(&record, "Fiber"), None);
        assert_eq!(number(&record, "Sodium"), None);
    }

    #[test]
    fn test_text_unwraps_rendered() {
        let record = json!({"title": {"rendered": "Taco Tuesday"}, "FoodID": 17});

        assert_eq!(text(&record, "title").as_deref(), Some("Taco Tuesday"));
        assert_eq!(text(&record, "FoodID").as_deref(), Some("17"));
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(parse_timestamp("1970-01-01T00:01:00Z"), Some(60));
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn test_fallback_key_is_now() {
        let normalizer = MenuNormalizer::default();
        let items = normalizer.normalize_at(&[json!({"FoodID": "1"})], 1_000);

        assert_eq!(items[0].order_key, 1_000);
    }
}
