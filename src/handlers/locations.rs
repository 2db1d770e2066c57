use crate::models::Location;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /getLocations handler - List every known campus location
#[utoipa::path(
    get,
    path = routes::GET_LOCATIONS,
    responses(
        (status = 200, description = "All known locations", body = Vec<Location>)
    ),
    tag = "campus"
)]
pub async fn locations_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Vec<Location>>) {
    let locations = state.query_service.all_locations();
    tracing::info!("Listed {} locations", locations.len());
    (StatusCode::OK, Json(locations))
}
