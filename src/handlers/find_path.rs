use crate::error::{ApiError, ErrorResponse};
use crate::models::{FindPathQuery, Path};
use crate::query::QueryService;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, http::Uri, Json};

/// Check that both names exist, source first, then look up the path
///
/// Returns at the first failing step so `dest` is never inspected when `src`
/// is unknown and no path lookup happens for an unknown name.
pub fn resolve_path(
    service: &dyn QueryService,
    src: Option<&str>,
    dest: Option<&str>,
) -> Result<Path, ApiError> {
    let src = src
        .filter(|name| service.exists(name))
        .ok_or_else(|| ApiError::UnknownSource(src.unwrap_or_default().to_string()))?;

    let dest = dest
        .filter(|name| service.exists(name))
        .ok_or_else(|| ApiError::UnknownDestination(dest.unwrap_or_default().to_string()))?;

    service
        .shortest_path(src, dest)
        .ok_or_else(|| ApiError::NoPathFound {
            src: src.to_string(),
            dest: dest.to_string(),
        })
}

/// GET /findPath handler - Shortest path between two locations
#[utoipa::path(
    get,
    path = routes::FIND_PATH,
    params(FindPathQuery),
    responses(
        (status = 200, description = "Shortest path found", body = Path),
        (status = 455, description = "Source location does not exist", body = ErrorResponse),
        (status = 456, description = "Destination location does not exist", body = ErrorResponse),
        (status = 457, description = "No path between the two locations", body = ErrorResponse)
    ),
    tag = "campus"
)]
pub async fn find_path_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<(StatusCode, Json<Path>), ApiError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri)
        .map_err(|e| ApiError::InvalidQueryParam(e.body_text()))?;
    let query = FindPathQuery::from_pairs(pairs);

    match resolve_path(
        state.query_service.as_ref(),
        query.src.as_deref(),
        query.dest.as_deref(),
    ) {
        Ok(path) => {
            tracing::info!(
                "Found path from {:?} to {:?}: {} segments ending at ({}, {}), cost {}",
                query.src,
                query.dest,
                path.path.len(),
                path.end().x,
                path.end().y,
                path.cost
            );
            Ok((StatusCode::OK, Json(path)))
        }
        Err(e) => {
            tracing::info!("Path lookup rejected: {:?}", e);
            Err(e)
        }
    }
}
