use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use super::{MailError, Mailer, OutgoingEmail};
use crate::config::Config;

/// SMTP-backed mailer.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build an SMTP transport from the configuration, relaying through
    /// `host` with STARTTLS unless disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be configured.
    pub fn new(config: &Config, host: &str) -> Result<Self, MailError> {
        let builder = if config.smtp_starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
        }
        .port(config.smtp_port);

        let builder = if let (Some(username), Some(password)) =
            (&config.smtp_username, &config.smtp_password)
        {
            builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            builder
        };

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<usize, MailError> {
        let from: Mailbox = email.from.parse()?;
        let to = Mailbox::new(None, email.to.into_inner());

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(header::ContentType::TEXT_PLAIN)
            .body(email.body)?;

        self.transport.send(message).await?;
        tracing::info!(subject = %email.subject, "Email sent");
        Ok(1)
    }
}
