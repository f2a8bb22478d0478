use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Outcomes the handlers map straight onto response codes.
///
/// Both kinds are signaled through service return values, never raised as
/// faults, and both leave the response body empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Lookup or delete target absent.
    #[error("user not found")]
    NotFound,

    /// Creation rejected by the service.
    #[error("create request rejected")]
    InvalidInput,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
        };
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn not_found_maps_to_empty_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn invalid_input_maps_to_empty_400() {
        let response = ApiError::InvalidInput.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
