use async_trait::async_trait;
use std::path::PathBuf;

use crate::modules::version::application::domain::entities::VersionRecord;
use crate::modules::version::application::ports::outgoing::version_file::{
    VersionFile, VersionFileError,
};

/// `{"version": "...", "lastUpdated": "..."}` on the local disk.
#[derive(Debug, Clone)]
pub struct JsonVersionFile {
    path: PathBuf,
}

impl JsonVersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl VersionFile for JsonVersionFile {
    async fn read(&self) -> Result<VersionRecord, VersionFileError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| VersionFileError::Io(e.to_string()))?;

        serde_json::from_slice(&raw).map_err(|e| VersionFileError::Malformed(e.to_string()))
    }

    async fn write(&self, record: &VersionRecord) -> Result<(), VersionFileError> {
        let raw = serde_json::to_vec_pretty(record)
            .map_err(|e| VersionFileError::Malformed(e.to_string()))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| VersionFileError::Io(e.to_string()))
    }
}
