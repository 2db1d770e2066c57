use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Status code for an unknown `src` location
pub const UNKNOWN_SOURCE: u16 = 455;
/// Status code for an unknown `dest` location
pub const UNKNOWN_DESTINATION: u16 = 456;
/// Status code for two known locations with no connecting path
pub const NO_PATH_FOUND: u16 = 457;

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Each variant maps to its own status code. Clients distinguish failures by
/// status alone; the JSON body is informational.
#[derive(Debug)]
pub enum ApiError {
    /// `src` does not name a known location
    UnknownSource(String),
    /// `dest` does not name a known location
    UnknownDestination(String),
    /// Both locations are known but not connected
    NoPathFound { src: String, dest: String },
    /// Query string could not be decoded
    InvalidQueryParam(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            ApiError::UnknownSource(_) => UNKNOWN_SOURCE,
            ApiError::UnknownDestination(_) => UNKNOWN_DESTINATION,
            ApiError::NoPathFound { .. } => NO_PATH_FOUND,
            ApiError::InvalidQueryParam(_) => return StatusCode::BAD_REQUEST,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            ApiError::UnknownSource(name) => format!("Unknown source location: '{}'", name),
            ApiError::UnknownDestination(name) => {
                format!("Unknown destination location: '{}'", name)
            }
            ApiError::NoPathFound { src, dest } => {
                format!("No path found from '{}' to '{}'", src, dest)
            }
            ApiError::InvalidQueryParam(msg) => format!("Invalid query parameter: {}", msg),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::UnknownSource("XXXX".to_string()).status_code().as_u16(),
            455
        );
        assert_eq!(
            ApiError::UnknownDestination("YYYY".to_string())
                .status_code()
                .as_u16(),
            456
        );
        assert_eq!(
            ApiError::NoPathFound {
                src: "CSE".to_string(),
                dest: "ISLAND".to_string(),
            }
            .status_code()
            .as_u16(),
            457
        );
        assert_eq!(
            ApiError::InvalidQueryParam("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_into_response_has_json_body() {
        let response = ApiError::UnknownDestination("YYYY".to_string()).into_response();
        assert_eq!(response.status().as_u16(), 456);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("YYYY"));
    }
}
