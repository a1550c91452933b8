//! Metrics setup and initialization.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;

use super::{cache::register_cache_metrics, feed::register_feed_metrics, http::register_http_metrics};

/// Buckets de histogramas, en segundos. Cubren desde lecturas de cache
/// (microsegundos) hasta fetches lentos al feed remoto.
const BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Instala el recorder global y retorna el handle para `/metrics`.
///
/// # Errors
///
/// Falla si ya hay un recorder instalado en el proceso.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets(BUCKETS)?
        .install_recorder()?;

    register_cache_metrics();
    register_feed_metrics();
    register_http_metrics();

    info!("Metrics system initialized");
    Ok(handle)
}

/// Handle sin recorder global, para routers de test.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}
