use actix_web::{error, http::StatusCode, HttpResponse};
use thiserror::Error;
use crate::core::MatchError;
use crate::models::ErrorResponse;

/// Errors surfaced to HTTP clients as `ErrorResponse` JSON bodies
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    InvalidOptions(#[from] MatchError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::Validation(_) => "validation_failed",
            ApiError::InvalidOptions(_) => "invalid_options",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_invalid_options_maps_to_bad_request() {
        let err = ApiError::from(MatchError::InvalidLimit);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "invalid_options");
        assert_eq!(err.to_string(), "Invalid limit: must be at least 1");
    }
}
