use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactDetailsUseCase, SendContactMessageUseCase, UpdateContactDetailsUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_repository::ContactRepository;
use crate::modules::contact::application::service::{ContactDetailsService, ContactMessageService};
use crate::modules::email::application::ports::outgoing::EmailSender;

#[derive(Clone)]
pub struct ContactUseCases {
    pub get_details: Arc<dyn GetContactDetailsUseCase + Send + Sync>,
    pub update_details: Arc<dyn UpdateContactDetailsUseCase + Send + Sync>,
    pub send_message: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}

impl ContactUseCases {
    /// `admin_email` seeds the details row and receives contact messages.
    pub fn new<R>(
        repository: R,
        sender: Arc<dyn EmailSender + Send + Sync>,
        admin_email: &str,
    ) -> Self
    where
        R: ContactRepository + 'static,
    {
        let details = Arc::new(ContactDetailsService::new(repository, admin_email));
        Self {
            get_details: details.clone(),
            update_details: details,
            send_message: Arc::new(ContactMessageService::new(sender, admin_email)),
        }
    }
}
