//! Cache maintenance endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Response para operaciones de invalidación.
#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    /// Número de entries invalidadas.
    pub invalidated: usize,
    /// Mensaje descriptivo.
    pub message: String,
}

/// Response del evento de guardado de contenido.
#[derive(Debug, Serialize)]
pub struct TouchResponse {
    /// Nueva generación del marcador last-changed.
    pub generation: u64,
}

/// POST /cache/touch
/// Registra un guardado de contenido.
#[instrument(skip_all)]
pub async fn touch(State(state): State<AppState>) -> Json<TouchResponse> {
    Json(TouchResponse {
        generation: state.service().touch(),
    })
}

/// DELETE /cache
/// Invalida toda la cache.
#[instrument(skip_all)]
pub async fn invalidate_all(State(state): State<AppState>) -> Response {
    let count = state.service().invalidate_all();

    tracing::info!(count = count, "All cache entries invalidated");

    (
        StatusCode::OK,
        Json(InvalidateResponse {
            invalidated: count as usize,
            message: format!("Invalidated all {} cache entries", count),
        }),
    )
        .into_response()
}

/// DELETE /cache/{namespace}
/// Invalida todas las entries de una surface.
#[instrument(skip_all, fields(namespace = %namespace))]
pub async fn invalidate_namespace(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
) -> Result<Response, AppError> {
    if state.service().surface(&namespace).is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown cache namespace '{namespace}'"
        )));
    }

    let result = state.service().invalidate_namespace(&namespace).await;

    tracing::info!(
        namespace = %namespace,
        count = result.count,
        "Cache entries invalidated"
    );

    Ok((
        StatusCode::OK,
        Json(InvalidateResponse {
            invalidated: result.count,
            message: format!(
                "Invalidated {} cache entries for namespace '{}'",
                result.count, namespace
            ),
        }),
    )
        .into_response())
}
