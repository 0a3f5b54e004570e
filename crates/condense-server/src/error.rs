use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Request-level failures. Anything that happens once a submission is
/// well-formed is reported in the response body instead.
#[derive(Debug)]
pub enum ApiError {
    /// The multipart body could not be read. Keeps axum's status, so an
    /// over-limit upload answers 413.
    Multipart { status: StatusCode, message: String },
    UnsupportedUpload(String),
    UnknownModel(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Multipart { status, message } => (status, message),
            ApiError::UnsupportedUpload(filename) => (
                StatusCode::BAD_REQUEST,
                format!("unsupported file type: {filename:?} (expected .docx)"),
            ),
            ApiError::UnknownModel(model) => {
                (StatusCode::BAD_REQUEST, format!("unknown model: {model}"))
            }
        };

        tracing::warn!(status = %status, "{message}");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Multipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}
