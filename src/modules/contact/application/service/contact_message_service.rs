use async_trait::async_trait;
use email_address::EmailAddress;
use lettre::message::Mailbox;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, ContactMessageDraft, SendContactMessageUseCase,
};
use crate::modules::email::application::ports::outgoing::{
    EmailError, EmailSender, OutgoingEmail,
};
use crate::shared::validation::{non_blank, RequiredFields, ValidationError};

/// Forwards contact-form submissions to the site owner's inbox.
pub struct ContactMessageService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    recipient: String,
}

impl ContactMessageService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, recipient: &str) -> Self {
        Self {
            sender,
            recipient: recipient.to_string(),
        }
    }
}

/// Accepts only addresses the mail transport can put in a Reply-To header:
/// no quoted local parts and no domain literals.
fn is_replyable_address(email: &str) -> bool {
    let Ok(address) = EmailAddress::from_str(email) else {
        return false;
    };
    !address.local_part().starts_with('"')
        && !address.domain().starts_with('[')
        && email.parse::<Mailbox>().is_ok()
}

fn validate(draft: ContactMessageDraft) -> Result<ContactMessage, ValidationError> {
    RequiredFields::new()
        .text("name", draft.name.as_deref())
        .text("email", draft.email.as_deref())
        .text("message", draft.message.as_deref())
        .finish()?;

    let email = draft.email.unwrap_or_default().trim().to_string();
    if !is_replyable_address(&email) {
        return Err(ValidationError::Invalid(
            "email must be a valid address".to_string(),
        ));
    }

    Ok(ContactMessage {
        name: draft.name.unwrap_or_default().trim().to_string(),
        email,
        subject: non_blank(draft.subject).map(|s| s.trim().to_string()),
        message: draft.message.unwrap_or_default(),
    })
}

#[async_trait]
impl SendContactMessageUseCase for ContactMessageService {
    async fn execute(&self, draft: ContactMessageDraft) -> Result<(), ContactError> {
        let message = validate(draft)?;

        self.sender
            .send_email(OutgoingEmail {
                to: self.recipient.clone(),
                reply_to: Some(message.email.clone()),
                subject: message.mail_subject(),
                body: message.mail_body(),
            })
            .await
            .map_err(|e| match e {
                EmailError::InvalidAddress(_) => ContactError::Validation(
                    ValidationError::Invalid("email must be a valid address".to_string()),
                ),
                other => ContactError::Delivery(other.to_string()),
            })?;

        info!(from = %message.email, "Contact message forwarded");
        Ok(())
    }
}
