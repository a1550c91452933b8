//! Feed fetch metrics.

use metrics::counter;

/// Describe las metricas del feed remoto.
pub fn register_feed_metrics() {
    metrics::describe_counter!(
        "syndicate_feed_fetch_total",
        "Remote feed fetches by outcome"
    );
}

/// Registra el resultado de un fetch: `items`, `empty`, `status`,
/// `malformed` o `transport`.
pub fn record_fetch(outcome: &'static str) {
    counter!("syndicate_feed_fetch_total", "outcome" => outcome).increment(1);
}
