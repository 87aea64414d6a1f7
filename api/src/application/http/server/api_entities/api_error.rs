use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use larder_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "E_FORBIDDEN"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "E_VALIDATION"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message)
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message)
            | ApiError::Conflict(message)
            | ApiError::Validation(message)
            | ApiError::InternalServerError(message) => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.status_and_code();

        let error_response = ErrorResponse {
            code: code.to_string(),
            message: self.message(),
            status: status.as_u16() as i64,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::InsufficientStock { food } => {
                ApiError::BadRequest(format!("Not enough {food} in pantry"))
            }
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            CoreError::SessionExpired => ApiError::Unauthorized("Session expired".to_string()),
            CoreError::EmailAlreadyExists => {
                ApiError::Conflict("An account with this email already exists".to_string())
            }
            CoreError::Forbidden(reason) => ApiError::Forbidden(reason),
            CoreError::Invalid(reason) => ApiError::BadRequest(reason),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// JSON extractor that runs the payload through its `validator` rules before
/// the handler sees it.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_keeps_the_food_name_in_the_message() {
        let error = ApiError::from(CoreError::InsufficientStock {
            food: "flour".to_string(),
        });

        assert_eq!(
            error,
            ApiError::BadRequest("Not enough flour in pantry".to_string())
        );
        assert_eq!(error.status_and_code().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let error = ApiError::from(CoreError::NotFound);
        assert_eq!(error.status_and_code().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_email_maps_to_conflict() {
        let error = ApiError::from(CoreError::EmailAlreadyExists);
        assert_eq!(error.status_and_code().0, StatusCode::CONFLICT);
    }
}
