use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactDetails;
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactDetailsChanges, ContactRepositoryError,
};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    Repository(String),

    #[error("email delivery failed: {0}")]
    Delivery(String),
}

impl From<ContactRepositoryError> for ContactError {
    fn from(e: ContactRepositoryError) -> Self {
        ContactError::Repository(e.to_string())
    }
}

/// Unvalidated contact-form submission.
#[derive(Debug, Clone, Default)]
pub struct ContactMessageDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[async_trait]
pub trait GetContactDetailsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactDetails, ContactError>;
}

#[async_trait]
pub trait UpdateContactDetailsUseCase: Send + Sync {
    async fn execute(&self, changes: ContactDetailsChanges)
        -> Result<ContactDetails, ContactError>;
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, draft: ContactMessageDraft) -> Result<(), ContactError>;
}
