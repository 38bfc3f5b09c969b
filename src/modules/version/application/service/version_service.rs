use async_trait::async_trait;
use tracing::warn;

use crate::modules::version::application::domain::entities::{
    is_semver, VersionRecord, INITIAL_VERSION,
};
use crate::modules::version::application::ports::incoming::use_cases::{
    GetVersionUseCase, UpdateVersionUseCase, VersionError,
};
use crate::modules::version::application::ports::outgoing::version_file::VersionFile;
use crate::modules::version::application::ports::outgoing::version_repository::VersionRepository;
use crate::shared::validation::{RequiredFields, ValidationError};

pub struct VersionService<R, F>
where
    R: VersionRepository,
    F: VersionFile,
{
    repository: R,
    file: F,
}

impl<R, F> VersionService<R, F>
where
    R: VersionRepository,
    F: VersionFile,
{
    pub fn new(repository: R, file: F) -> Self {
        Self { repository, file }
    }
}

#[async_trait]
impl<R, F> GetVersionUseCase for VersionService<R, F>
where
    R: VersionRepository + Send + Sync,
    F: VersionFile + Send + Sync,
{
    async fn execute(&self) -> Result<VersionRecord, VersionError> {
        let stored = match self.repository.get().await {
            Ok(Some(record)) => return Ok(record),
            Ok(None) => self.repository.seed(INITIAL_VERSION).await,
            Err(e) => Err(e),
        };

        match stored {
            Ok(record) => Ok(record),
            Err(db_err) => {
                warn!("Version read failed, using local file: {}", db_err);
                self.file.read().await.map_err(|file_err| {
                    VersionError::Unavailable(format!("{db_err}; {file_err}"))
                })
            }
        }
    }
}

#[async_trait]
impl<R, F> UpdateVersionUseCase for VersionService<R, F>
where
    R: VersionRepository + Send + Sync,
    F: VersionFile + Send + Sync,
{
    async fn execute(&self, version: Option<String>) -> Result<VersionRecord, VersionError> {
        RequiredFields::new()
            .text("version", version.as_deref())
            .finish()?;

        let version = version.unwrap_or_default().trim().to_string();
        if !is_semver(&version) {
            return Err(ValidationError::Invalid(format!(
                "'{version}' is not a semantic version (MAJOR.MINOR.PATCH)"
            ))
            .into());
        }

        let record = self
            .repository
            .put(&version)
            .await
            .map_err(|e| VersionError::Unavailable(e.to_string()))?;

        if let Err(e) = self.file.write(&record).await {
            warn!("Version stored but local file not updated: {}", e);
        }

        Ok(record)
    }
}
