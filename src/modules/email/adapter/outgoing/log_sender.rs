use async_trait::async_trait;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{EmailError, EmailSender, OutgoingEmail};

/// Used when no SMTP relay is configured; the message only reaches the log.
#[derive(Debug, Default, Clone)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        info!(
            to = %email.to,
            reply_to = email.reply_to.as_deref().unwrap_or("-"),
            subject = %email.subject,
            "SMTP not configured, email logged instead of sent:\n{}",
            email.body
        );
        Ok(())
    }
}
