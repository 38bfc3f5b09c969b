use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{FileUpload, UploadedFile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Only one file may be uploaded per request")]
    TooManyFiles,

    #[error("File type {0} is not allowed")]
    InvalidFileType(String),

    #[error("File exceeds the {limit_bytes} byte limit")]
    FileTooLarge { limit_bytes: u64 },

    #[error("Invalid file name")]
    InvalidFileName,

    #[error("File not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

#[async_trait]
pub trait UploadFileUseCase: Send + Sync {
    async fn execute(&self, upload: FileUpload) -> Result<UploadedFile, UploadError>;
}

#[async_trait]
pub trait DeleteFileUseCase: Send + Sync {
    async fn execute(&self, object_name: &str) -> Result<(), UploadError>;
}
