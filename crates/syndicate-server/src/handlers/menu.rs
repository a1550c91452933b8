//! Render endpoints. The query string is the caller attribute map.

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tracing::instrument;

use crate::state::AppState;

/// GET /render/{surface}
#[instrument(skip_all, fields(surface = %surface))]
pub async fn render_surface(
    State(state): State<AppState>,
    Path(surface): Path<String>,
    Query(attributes): Query<Vec<(String, String)>>,
) -> Html<String> {
    Html(state.service().render_surface(&surface, &attributes).await)
}

/// GET /dining
#[instrument(skip_all)]
pub async fn render_dining(
    State(state): State<AppState>,
    Query(attributes): Query<Vec<(String, String)>>,
) -> Html<String> {
    Html(state.service().render_dining(&attributes).await)
}
