//! Feed de prueba que cuenta los fetches.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use syndicate_feed::{FeedTarget, FetchError, MenuFeed, RawPayload};

/// Responde siempre lo mismo y guarda las URLs pedidas.
pub struct StubFeed {
    answer: Result<RawPayload, FetchError>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl StubFeed {
    pub fn returning(records: Vec<Value>) -> Self {
        Self::answering(Ok(RawPayload::new(records)))
    }

    pub fn failing(error: FetchError) -> Self {
        Self::answering(Err(error))
    }

    fn answering(answer: Result<RawPayload, FetchError>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MenuFeed for StubFeed {
    async fn fetch(&self, target: &FeedTarget) -> Result<RawPayload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(target.url().to_string());
        self.answer.clone()
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Tres platos en dos categorias, con fechas repetidas.
pub fn sample_records() -> Vec<Value> {
    vec![
        json!({
            "FoodID": "101", "Food": "Oatmeal", "CategoryID": "A", "Category": "Breakfast",
            "HeartHealthy": "True", "Vegetarian": "True", "PortionSize": "8oz",
            "Grams": "227", "Calories": "150", "date": "2024-03-01T08:00:00+00:00"
        }),
        json!({
            "FoodID": "102", "Food": "Pancakes", "CategoryID": "A", "Category": "Breakfast",
            "Vegetarian": "true", "Calories": 420, "date": "2024-03-01T08:00:00+00:00"
        }),
        json!({
            "FoodID": "201", "Food": "Chili", "CategoryID": "B", "Category": "Lunch",
            "Spicy": "True", "Calories": "380", "date": "2024-03-01T12:00:00+00:00"
        }),
    ]
}
