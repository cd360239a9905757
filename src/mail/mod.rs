//! Outbound mail delivery.
//!
//! Handlers send mail through the [`Mailer`] trait rather than calling a
//! transport directly, so the delivery mechanism can be swapped per process
//! (SMTP in production, a logging no-op when SMTP is unconfigured) and per
//! test (an in-memory outbox).

mod address;
mod smtp;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

pub use address::EmailAddress;
pub use smtp::SmtpMailer;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build email message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// A single plain-text email ready for delivery.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub subject: String,
    pub body: String,
    /// Sender address. Callers read this from configuration at send time.
    pub from: String,
    pub to: EmailAddress,
}

/// Mail delivery capability.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one email, returning the number of messages sent.
    async fn send(&self, email: OutgoingEmail) -> Result<usize, MailError>;
}

/// Mailer that logs and drops every message.
///
/// Used when `SMTP_HOST` is unset, and by tests asserting that handlers
/// delegate delivery instead of performing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<usize, MailError> {
        tracing::info!(
            subject = %email.subject,
            recipient = %email.to,
            "Mail delivery disabled; dropping message"
        );
        Ok(0)
    }
}

/// Mailer that appends every message to a shared in-memory outbox.
///
/// Clones share the same outbox, so a test can keep one handle while the
/// application state owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryMailer {
    outbox: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl MemoryMailer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every email delivered so far.
    #[must_use]
    pub fn outbox(&self) -> Vec<OutgoingEmail> {
        self.outbox.lock().expect("outbox lock poisoned").clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<usize, MailError> {
        self.outbox.lock().expect("outbox lock poisoned").push(email);
        Ok(1)
    }
}
