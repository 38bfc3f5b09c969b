use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::resume::application::domain::section::ResumeSection;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Resume entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ResumeRepository<S: ResumeSection>: Send + Sync {
    /// By `order`, then oldest first.
    async fn list(&self) -> Result<Vec<S>, ResumeRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<S, ResumeRepositoryError>;

    async fn create(&self, entry: S::New) -> Result<S, ResumeRepositoryError>;

    async fn update(&self, id: Uuid, changes: S::Changes) -> Result<S, ResumeRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError>;
}
