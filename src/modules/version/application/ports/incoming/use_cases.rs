use async_trait::async_trait;

use crate::modules::version::application::domain::entities::VersionRecord;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VersionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("version unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait GetVersionUseCase: Send + Sync {
    async fn execute(&self) -> Result<VersionRecord, VersionError>;
}

#[async_trait]
pub trait UpdateVersionUseCase: Send + Sync {
    async fn execute(&self, version: Option<String>) -> Result<VersionRecord, VersionError>;
}
