// Route path constants - single source of truth for all API paths

pub const GET_LOCATIONS: &str = "/getLocations";
pub const FIND_PATH: &str = "/findPath";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
