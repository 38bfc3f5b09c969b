use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::resume::application::domain::section::ResumeSection;
use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRepositoryError;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Resume entry not found")]
    NotFound,

    #[error("repository error: {0}")]
    Repository(String),
}

impl From<ResumeRepositoryError> for ResumeError {
    fn from(e: ResumeRepositoryError) -> Self {
        match e {
            ResumeRepositoryError::NotFound => ResumeError::NotFound,
            other => ResumeError::Repository(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ListResumeEntriesUseCase<S: ResumeSection>: Send + Sync {
    async fn execute(&self) -> Result<Vec<S>, ResumeError>;
}

#[async_trait]
pub trait GetResumeEntryUseCase<S: ResumeSection>: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<S, ResumeError>;
}

#[async_trait]
pub trait CreateResumeEntryUseCase<S: ResumeSection>: Send + Sync {
    async fn execute(&self, draft: S::Draft) -> Result<S, ResumeError>;
}

#[async_trait]
pub trait UpdateResumeEntryUseCase<S: ResumeSection>: Send + Sync {
    async fn execute(&self, id: Uuid, changes: S::Changes) -> Result<S, ResumeError>;
}

#[async_trait]
pub trait DeleteResumeEntryUseCase<S: ResumeSection>: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ResumeError>;
}
