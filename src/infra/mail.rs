use anyhow::Context as _;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::LinkConfig;
use crate::domain::repository::OtpMailer;
use crate::error::LinkServiceError;

/// SMTP-backed mailer for passcode delivery.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &LinkConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .context("build SMTP transport")?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();
        let from = config
            .mail_from
            .parse::<Mailbox>()
            .context("parse MAIL_FROM address")?;
        Ok(Self { transport, from })
    }
}

impl OtpMailer for SmtpMailer {
    async fn send_otp(&self, to: &str, code: &str) -> Result<(), LinkServiceError> {
        let to = to
            .parse::<Mailbox>()
            .context("parse recipient address")?;
        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Your OTP to join the Discord community")
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Your OTP is {code}. It is valid for a single attempt."
            ))
            .context("build OTP email")?;
        self.transport.send(email).await.context("send OTP email")?;
        Ok(())
    }
}
