use crate::domain::repository::UserRepository;
use crate::error::LinkServiceError;

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
    pub discord_id: String,
}

pub struct VerifyOtpUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> VerifyOtpUseCase<R> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<(), LinkServiceError> {
        if input.email.trim().is_empty()
            || input.otp.trim().is_empty()
            || input.discord_id.trim().is_empty()
        {
            return Err(LinkServiceError::MissingData);
        }

        let record = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(LinkServiceError::UserNotFound)?;

        // Linked is terminal: a second successful verification must never
        // reassign the Discord ID.
        if record.is_linked() {
            return Err(LinkServiceError::AlreadyLinked);
        }

        match record.otp {
            Some(ref stored) if *stored == input.otp => {
                self.repo
                    .link_discord(&input.email, &input.discord_id)
                    .await
            }
            Some(_) => {
                // Single-use policy: one failed attempt burns the code.
                self.repo.clear_otp(&input.email).await?;
                Err(LinkServiceError::InvalidOtp)
            }
            None => Err(LinkServiceError::InvalidOtp),
        }
    }
}
