use rand::RngExt;

use crate::domain::repository::{OtpMailer, UserRepository};
use crate::domain::types::{OTP_MAX, OTP_MIN};
use crate::error::LinkServiceError;

/// Uniformly random 6-digit numeric passcode.
fn generate_otp() -> String {
    let mut rng = rand::rng();
    rng.random_range(OTP_MIN..=OTP_MAX).to_string()
}

pub struct IssueOtpInput {
    pub email: String,
}

/// Outcome of an issuance request. "Already linked" is informational for
/// the caller, not an error: the linked state is terminal and re-issuance
/// must never re-send a code.
#[derive(Debug, PartialEq, Eq)]
pub enum IssueOtpOutcome {
    Sent,
    AlreadyLinked,
}

pub struct IssueOtpUseCase<R, M>
where
    R: UserRepository,
    M: OtpMailer,
{
    pub repo: R,
    pub mailer: M,
}

impl<R, M> IssueOtpUseCase<R, M>
where
    R: UserRepository,
    M: OtpMailer,
{
    pub async fn execute(
        &self,
        input: IssueOtpInput,
    ) -> Result<IssueOtpOutcome, LinkServiceError> {
        if input.email.trim().is_empty() {
            return Err(LinkServiceError::MissingData);
        }

        match self.repo.find_by_email(&input.email).await? {
            Some(record) if record.is_linked() => Ok(IssueOtpOutcome::AlreadyLinked),
            Some(_) => {
                self.issue(&input.email).await?;
                Ok(IssueOtpOutcome::Sent)
            }
            None => {
                // Create-if-absent policy: unknown emails get a record and a
                // code in the same request.
                self.repo.create(&input.email).await?;
                self.issue(&input.email).await?;
                Ok(IssueOtpOutcome::Sent)
            }
        }
    }

    /// Persist first, then send. A new code overwrites any prior one, so a
    /// mail failure after the write leaves the record consistent (the stale
    /// code is simply never delivered).
    async fn issue(&self, email: &str) -> Result<(), LinkServiceError> {
        let code = generate_otp();
        self.repo.set_otp(email, &code).await?;
        self.mailer.send_otp(email, &code).await
    }
}
