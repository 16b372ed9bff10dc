// Typed failures of the collection layer and their HTTP mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectError>;

#[derive(Debug, Error)]
pub enum CollectError {
    /// Per-core sample sequences differ in length and cannot be paired by index.
    #[error("per-core samples misaligned: info={info}, percent={percent}, times={times}")]
    AlignmentMismatch {
        info: usize,
        percent: usize,
        times: usize,
    },

    #[error("cannot extract device id from {path:?}")]
    DeviceIdParse { path: String },

    /// An upstream OS query failed; raised by a `MetricsSource`, never by the normalizers.
    #[error("{source_name} unavailable: {message}")]
    SourceUnavailable {
        source_name: &'static str,
        message: String,
    },
}

impl CollectError {
    pub fn unavailable(source_name: &'static str, err: impl std::fmt::Display) -> Self {
        CollectError::SourceUnavailable {
            source_name,
            message: err.to_string(),
        }
    }

    pub fn client_code(&self) -> &'static str {
        match self {
            CollectError::AlignmentMismatch { .. } => "ALIGNMENT_MISMATCH",
            CollectError::DeviceIdParse { .. } => "DEVICE_ID_PARSE",
            CollectError::SourceUnavailable { .. } => "SOURCE_UNAVAILABLE",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CollectError::SourceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            CollectError::AlignmentMismatch { .. } | CollectError::DeviceIdParse { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CollectError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.client_code(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
