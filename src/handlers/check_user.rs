use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::LinkServiceError;
use crate::state::AppState;
use crate::usecase::issue::{IssueOtpInput, IssueOtpOutcome, IssueOtpUseCase};

// ── POST /check-user ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckUserRequest {
    pub email: String,
    /// Accepted for wire compatibility; linking happens at verification.
    pub discord_id: Option<String>,
}

#[derive(Serialize)]
pub struct CheckUserResponse {
    pub message: String,
}

pub async fn check_user(
    State(state): State<AppState>,
    Json(body): Json<CheckUserRequest>,
) -> Result<Json<CheckUserResponse>, LinkServiceError> {
    let usecase = IssueOtpUseCase {
        repo: state.user_repo(),
        mailer: state.mailer.clone(),
    };
    let outcome = usecase.execute(IssueOtpInput { email: body.email }).await?;

    let message = match outcome {
        IssueOtpOutcome::Sent => "OTP sent successfully. Please check your email.",
        IssueOtpOutcome::AlreadyLinked => "Discord ID already linked.",
    };
    Ok(Json(CheckUserResponse {
        message: message.to_owned(),
    }))
}
