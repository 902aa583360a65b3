use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Link service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum LinkServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("invalid OTP")]
    InvalidOtp,
    #[error("discord account already linked")]
    AlreadyLinked,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl LinkServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidOtp => "INVALID_OTP",
            Self::AlreadyLinked => "ALREADY_LINKED",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for LinkServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidOtp | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::AlreadyLinked => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests, and 4xx are expected client errors. Internal errors
        // need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
