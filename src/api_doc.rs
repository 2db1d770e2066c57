use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{Location, Point, Segment};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "campus-paths API",
        version = "1.0.0",
        description = "Campus location listing and shortest-path lookup"
    ),
    paths(
        handlers::locations::locations_handler,
        handlers::find_path::find_path_handler
    ),
    components(
        schemas(
            Location,
            Point,
            Segment,
            crate::models::Path,
            ErrorResponse
        )
    ),
    tags(
        (name = "campus", description = "Campus location and path queries")
    )
)]
pub struct ApiDoc;
