use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Dietary markers carried by every menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryFlag {
    HeartHealthy,
    Vegetarian,
    Spicy,
    GlutenFree,
    NutAllergy,
    SoyAllergy,
    DairyAllergy,
    Seafood,
}

impl DietaryFlag {
    /// All flags, in display order.
    pub const ALL: [DietaryFlag; 8] = [
        Self::HeartHealthy,
        Self::Vegetarian,
        Self::Spicy,
        Self::GlutenFree,
        Self::NutAllergy,
        Self::SoyAllergy,
        Self::DairyAllergy,
        Self::Seafood,
    ];

    /// Human readable label, used as tooltip text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HeartHealthy => "Heart Healthy",
            Self::Vegetarian => "Vegetarian",
            Self::Spicy => "Spicy",
            Self::GlutenFree => "Gluten Friendly",
            Self::NutAllergy => "Nut Allergy",
            Self::SoyAllergy => "Soy Allergy",
            Self::DairyAllergy => "Dairy Allergy",
            Self::Seafood => "Seafood",
        }
    }

    /// Short identifier used in CSS class names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::HeartHealthy => "heart",
            Self::Vegetarian => "vegetarian",
            Self::Spicy => "spicy",
            Self::GlutenFree => "glutenfree",
            Self::NutAllergy => "nut",
            Self::SoyAllergy => "soy",
            Self::DairyAllergy => "dairy",
            Self::Seafood => "seafood",
        }
    }
}

/// A normalized menu record.
///
/// Serialized field names follow the upstream feed so that client-side
/// scripts consuming the JSON output see the same keys they would upstream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    /// Ordering key derived from the record date; unique within one result.
    #[serde(rename = "key")]
    pub order_key: i64,

    #[serde(rename = "FoodID")]
    pub food_id: String,
    #[serde(rename = "Food")]
    pub food_name: String,
    #[serde(rename = "CategoryID")]
    pub category_id: String,
    #[serde(rename = "Category")]
    pub category_name: String,

    #[serde(rename = "HeartHealthy")]
    pub heart_healthy: bool,
    #[serde(rename = "Vegetarian")]
    pub vegetarian: bool,
    #[serde(rename = "Spicy")]
    pub spicy: bool,
    #[serde(rename = "GlutenFree")]
    pub gluten_free: bool,
    #[serde(rename = "Nut")]
    pub nut_allergy: bool,
    #[serde(rename = "Soy")]
    pub soy_allergy: bool,
    #[serde(rename = "Dairy")]
    pub dairy_allergy: bool,
    #[serde(rename = "Seafood")]
    pub seafood: bool,

    /// Portion description, e.g. `4 oz`.
    #[serde(rename = "PortionSize")]
    pub portion_size: Option<String>,
    #[serde(rename = "Grams")]
    pub grams: Option<f64>,
    #[serde(rename = "Calories")]
    pub calories: Option<f64>,
    #[serde(rename = "Fat")]
    pub fat: Option<f64>,
    #[serde(rename = "Cholesterol")]
    pub cholesterol_mg: Option<f64>,
    #[serde(rename = "Sodium")]
    pub sodium_mg: Option<f64>,
    #[serde(rename = "Carbs")]
    pub carbs_g: Option<f64>,
    #[serde(rename = "Fiber")]
    pub fiber_g: Option<f64>,
    #[serde(rename = "Protein")]
    pub protein_g: Option<f64>,
    #[serde(rename = "Potassium")]
    pub potassium_mg: Option<f64>,

    pub event_begin: Option<NaiveDateTime>,
    pub event_end: Option<NaiveDateTime>,
    pub event_address: Option<String>,

    pub title: Option<String>,
    pub link: Option<String>,
    pub excerpt: Option<String>,
    pub thumbnail: Option<String>,
    pub thumbnail_alt: Option<String>,
    pub image: Option<String>,
    pub image_caption: Option<String>,
    pub author_name: Option<String>,
    pub date: Option<String>,
    pub modified: Option<String>,
}

impl MenuItem {
    pub fn has_flag(&self, flag: DietaryFlag) -> bool {
        match flag {
            DietaryFlag::HeartHealthy => self.heart_healthy,
            DietaryFlag::Vegetarian => self.vegetarian,
            DietaryFlag::Spicy => self.spicy,
            DietaryFlag::GlutenFree => self.gluten_free,
            DietaryFlag::NutAllergy => self.nut_allergy,
            DietaryFlag::SoyAllergy => self.soy_allergy,
            DietaryFlag::DairyAllergy => self.dairy_allergy,
            DietaryFlag::Seafood => self.seafood,
        }
    }

    /// Flags set on this item, in display order.
    pub fn flags(&self) -> impl Iterator<Item = DietaryFlag> + '_ {
        DietaryFlag::ALL
            .into_iter()
            .filter(move |flag| self.has_flag(*flag))
    }

    /// Headline text: the explicit title, or the food name.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.food_name)
    }

    /// Returns true when the record carries an event window start.
    pub fn is_event(&self) -> bool {
        self.event_begin.is_some()
    }
}
