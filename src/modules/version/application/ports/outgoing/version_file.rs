use async_trait::async_trait;

use crate::modules::version::application::domain::entities::VersionRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VersionFileError {
    #[error("version file io error: {0}")]
    Io(String),

    #[error("version file is malformed: {0}")]
    Malformed(String),
}

/// Local copy of the version record, read when the database is unreachable.
#[async_trait]
pub trait VersionFile: Send + Sync {
    async fn read(&self) -> Result<VersionRecord, VersionFileError>;
    async fn write(&self, record: &VersionRecord) -> Result<(), VersionFileError>;
}
