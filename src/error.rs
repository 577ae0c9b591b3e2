use aws_sdk_dynamodb::error::DisplayErrorContext;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Why a raw event could not become a `SubmissionRequest`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotAnObject,
    MissingField(&'static str),
    InvalidField(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotAnObject => write!(f, "Request payload must be a JSON object"),
            ValidationError::MissingField(name) => write!(f, "Missing required field: {name}"),
            ValidationError::InvalidField(name) => write!(f, "Field must be a string: {name}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum StoreError {
    Dynamo(Box<aws_sdk_dynamodb::Error>),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Dynamo(err) => {
                write!(f, "DynamoDB Error: {}", DisplayErrorContext(err.as_ref()))
            }
            StoreError::Unavailable(msg) => write!(f, "Store Unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Dynamo(err) => Some(err.as_ref()),
            StoreError::Unavailable(_) => None,
        }
    }
}

impl From<aws_sdk_dynamodb::Error> for StoreError {
    fn from(err: aws_sdk_dynamodb::Error) -> Self {
        StoreError::Dynamo(Box::new(err))
    }
}

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Store(StoreError),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "Validation Failed: {err}"),
            AppError::Store(err) => write!(f, "Storage Error: {err}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(err) => Some(err),
            AppError::Store(err) => Some(err),
            AppError::Internal(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Store(err) => {
                tracing::error!("Storage error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
