//! Cache metrics recording.

use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Describe las metricas de cache.
/// Llamar una vez al inicio, despues de instalar el recorder.
pub fn register_cache_metrics() {
    metrics::describe_counter!("syndicate_cache_hits_total", "Total number of cache hits");
    metrics::describe_counter!("syndicate_cache_misses_total", "Total number of cache misses");
    metrics::describe_counter!(
        "syndicate_cache_evictions_total",
        "Total number of cache evictions"
    );
    metrics::describe_gauge!("syndicate_cache_entries", "Current number of entries in cache");
    metrics::describe_histogram!(
        "syndicate_cache_operation_seconds",
        "Time spent on cache operations"
    );
}

/// Recorder de metricas de cache. Escribe en el recorder global.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics;

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        counter!("syndicate_cache_hits_total").increment(1);
    }

    pub fn record_miss(&self) {
        counter!("syndicate_cache_misses_total").increment(1);
    }

    pub fn record_eviction(&self, reason: &'static str) {
        counter!("syndicate_cache_evictions_total", "reason" => reason).increment(1);
    }

    pub fn update_entry_count(&self, count: u64) {
        gauge!("syndicate_cache_entries").set(count as f64);
    }

    pub fn record_operation_duration(&self, operation: &'static str, duration: Duration) {
        histogram!("syndicate_cache_operation_seconds", "operation" => operation)
            .record(duration.as_secs_f64());
    }

}

