use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the application router
///
/// The CORS layer wraps every route, so error responses carry the same
/// cross-origin headers as successful ones.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_allow_origin.clone());

    Router::new()
        .route(routes::GET_LOCATIONS, get(handlers::locations_handler))
        .route(routes::FIND_PATH, get(handlers::find_path_handler))
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Read-only cross-origin policy for the front-end
pub fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    match origin {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}
