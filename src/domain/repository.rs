#![allow(async_fn_in_trait)]

use crate::domain::types::UserRecord;
use crate::error::LinkServiceError;

/// Repository for email-keyed user records.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, LinkServiceError>;

    /// Lookup by linked Discord ID (used by the guild-join reaction).
    async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<UserRecord>, LinkServiceError>;

    /// Insert a fresh record with no Discord ID and no outstanding code.
    async fn create(&self, email: &str) -> Result<(), LinkServiceError>;

    /// Persist a new code, overwriting any prior one for that email.
    async fn set_otp(&self, email: &str, otp: &str) -> Result<(), LinkServiceError>;

    /// Invalidate the outstanding code without touching anything else.
    async fn clear_otp(&self, email: &str) -> Result<(), LinkServiceError>;

    /// Set the Discord ID and clear the code in a single update.
    async fn link_discord(
        &self,
        email: &str,
        discord_id: &str,
    ) -> Result<(), LinkServiceError>;
}

/// Port for dispatching a passcode to an email address.
pub trait OtpMailer: Send + Sync {
    async fn send_otp(&self, to: &str, code: &str) -> Result<(), LinkServiceError>;
}

/// Port for granting the configured guild role to a Discord user.
pub trait RoleGranter: Send + Sync {
    async fn grant_member_role(&self, discord_id: &str) -> Result<(), LinkServiceError>;
}
