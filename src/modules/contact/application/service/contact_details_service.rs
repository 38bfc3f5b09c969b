use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::info;

use crate::modules::contact::application::domain::entities::ContactDetails;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, GetContactDetailsUseCase, UpdateContactDetailsUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactDetailsChanges, ContactRepository,
};
use crate::shared::validation::ValidationError;

pub struct ContactDetailsService<R>
where
    R: ContactRepository,
{
    repository: R,
    default_email: String,
}

impl<R> ContactDetailsService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R, default_email: &str) -> Self {
        Self {
            repository,
            default_email: default_email.to_string(),
        }
    }
}

#[async_trait]
impl<R> GetContactDetailsUseCase for ContactDetailsService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ContactDetails, ContactError> {
        if let Some(details) = self.repository.get().await? {
            return Ok(details);
        }

        info!("Contact details missing, storing defaults");
        Ok(self
            .repository
            .upsert(ContactDetailsChanges::default(), &self.default_email)
            .await?)
    }
}

#[async_trait]
impl<R> UpdateContactDetailsUseCase for ContactDetailsService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        mut changes: ContactDetailsChanges,
    ) -> Result<ContactDetails, ContactError> {
        if let Some(email) = changes.email.take() {
            let email = email.trim().to_string();
            if !EmailAddress::is_valid(&email) {
                return Err(ValidationError::Invalid("email must be a valid address".into()).into());
            }
            changes.email = Some(email);
        }

        Ok(self
            .repository
            .upsert(changes, &self.default_email)
            .await?)
    }
}
