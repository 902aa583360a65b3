use axum::http::StatusCode;

/// `GET /healthz` — liveness. The process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — readiness. The OTP flow has no warm-up phase, so this
/// mirrors liveness.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
