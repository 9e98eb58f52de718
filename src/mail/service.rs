use async_trait::async_trait;
use lettre::{
    message::{header, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};

use crate::app::envy::Envy;

use super::errors::MailError;

/// Delivers plain-text notifications to an operator mailbox.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(envy: &Envy) -> Result<Self, MailError> {
        let from = envy.mail_user.parse::<Mailbox>()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&envy.mail_host)?
            .credentials(Credentials::new(
                envy.mail_user.to_string(),
                envy.mail_pass.to_string(),
            ))
            .build();

        return Ok(Self { from, transport });
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let mail = lettre::Message::builder()
            .from(self.from.clone())
            .to(to.parse::<Mailbox>()?)
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(String::from(body))?;

        self.transport.send(mail).await?;

        Ok(())
    }
}
