use chrono::{DateTime, Utc};

/// User record keyed by email, the single row the OTP state machine mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    /// Set exactly once, from unset to a value. Non-null means linked.
    pub discord_id: Option<String>,
    /// Transient: present only between issuance and the next verification
    /// attempt. Cleared after any attempt, success or failure.
    pub otp: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn is_linked(&self) -> bool {
        self.discord_id.is_some()
    }
}

/// Inclusive bounds for generated passcodes (always 6 digits).
pub const OTP_MIN: u32 = 100_000;
pub const OTP_MAX: u32 = 999_999;
