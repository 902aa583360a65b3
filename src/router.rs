use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{check_user::check_user, verify_otp::verify_otp};
use crate::health::{healthz, readyz};
use crate::middleware::request_id_layer;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // OTP linking
        .route("/check-user", post(check_user))
        .route("/verify-otp", post(verify_otp))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
