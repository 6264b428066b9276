use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// JSON body extractor whose rejections go through the service error
/// taxonomy, so a malformed or mis-shaped request body answers 400 with a
/// stable reason code instead of axum's default rejection.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Central error taxonomy for the service.
///
/// The first five variants are expected, user-facing outcomes and map to 4xx
/// responses with a stable reason code. `Storage` and `Internal` map to 5xx
/// with a generic message; their causes are logged server-side and never
/// leaked to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("email already registered")]
    EmailTaken,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("authentication required")]
    Unauthenticated,

    #[error("admin access required")]
    Forbidden,

    #[error("storage unavailable")]
    Storage(#[source] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // A unique violation on insert means a concurrent writer won the
        // race for the normalized email key. Expected outcome, not a fault.
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation {
                return AppError::EmailTaken;
            }
        }
        AppError::Storage(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            AppError::EmailTaken => (
                StatusCode::BAD_REQUEST,
                "email_taken",
                "Email already registered".to_string(),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "Invalid email or password".to_string(),
            ),
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                "Missing or invalid credentials".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "forbidden",
                "Admin access required".to_string(),
            ),
            AppError::Storage(source) => {
                error!("[ERROR] ❌ Storage failure: {source}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "storage_unavailable",
                    "Service temporarily unavailable".to_string(),
                )
            }
            AppError::Internal(detail) => {
                error!("[ERROR] ❌ Internal failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
