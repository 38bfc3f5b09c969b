use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::modules::contact::application::domain::entities::ContactDetails;

/// Merge input; `None` keeps the stored value and `social_links` entries
/// are merged into the stored map key by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetailsChanges {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub social_links: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn get(&self) -> Result<Option<ContactDetails>, ContactRepositoryError>;

    /// Insert-or-merge in one statement. When the row does not exist yet it
    /// is created from `changes`, with `default_email` for a missing email.
    async fn upsert(
        &self,
        changes: ContactDetailsChanges,
        default_email: &str,
    ) -> Result<ContactDetails, ContactRepositoryError>;
}
