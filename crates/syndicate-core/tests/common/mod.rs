#![allow(dead_code)]
use serde_json::{Value, json};
use syndicate_core::{AttributeResolver, RequestConfig, Surface};

/// Resolves `pairs` for the `dining` surface with standard defaults.
/// Panics if resolution fails (intended for tests).
pub fn dining_config(pairs: &[(&str, &str)]) -> RequestConfig {
    AttributeResolver::default()
        .resolve(pairs.iter().copied(), &Surface::dining())
        .expect("Failed to resolve test attributes")
}

/// Returns a raw feed record as the upstream emits it.
pub fn record(id: &str, name: &str, category: &str, date: &str) -> Value {
    json!({
        "FoodID": id,
        "Food": name,
        "CategoryID": category,
        "Category": format!("Category {category}"),
        "HeartHealthy": "False",
        "Vegetarian": "True",
        "Spicy": "False",
        "GlutenFree": "False",
        "Nut": "False",
        "Soy": "False",
        "Dairy": "True",
        "Seafood": "False",
        "PortionSize": "1 cup",
        "Grams": "200",
        "Calories": "310",
        "Fat": "12",
        "Cholesterol": "30",
        "Sodium": "480",
        "Carbs": "40",
        "Fiber": "3",
        "Protein": "11",
        "Potassium": "",
        "date": date,
    })
}
