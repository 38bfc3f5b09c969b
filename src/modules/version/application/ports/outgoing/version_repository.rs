use async_trait::async_trait;

use crate::modules::version::application::domain::entities::VersionRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VersionRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VersionRepository: Send + Sync {
    async fn get(&self) -> Result<Option<VersionRecord>, VersionRepositoryError>;

    /// Stores `version` unless a record already exists, then returns the
    /// stored record.
    async fn seed(&self, version: &str) -> Result<VersionRecord, VersionRepositoryError>;

    /// Insert or overwrite.
    async fn put(&self, version: &str) -> Result<VersionRecord, VersionRepositoryError>;
}
