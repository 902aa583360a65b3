use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::LinkServiceError;
use crate::state::AppState;
use crate::usecase::verify::{VerifyOtpInput, VerifyOtpUseCase};

// ── POST /verify-otp ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
    pub discord_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, LinkServiceError> {
    let usecase = VerifyOtpUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(VerifyOtpInput {
            email: body.email,
            otp: body.otp,
            discord_id: body.discord_id,
        })
        .await?;

    Ok(Json(VerifyOtpResponse {
        message: "OTP verified successfully. Redirecting to Discord!".to_owned(),
        invite_link: state.invite_url.clone(),
    }))
}
