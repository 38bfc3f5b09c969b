use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::modules::media::application::domain::entities::{
    is_valid_object_name, object_name, public_url, FileUpload, UploadedFile,
};
use crate::modules::media::application::domain::upload_policy::UploadPolicy;
use crate::modules::media::application::ports::incoming::use_cases::{
    DeleteFileUseCase, UploadError, UploadFileUseCase,
};
use crate::modules::media::application::ports::outgoing::{ObjectStorage, StorageError};

pub struct UploadService {
    storage: Arc<dyn ObjectStorage + Send + Sync>,
    policy: UploadPolicy,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage + Send + Sync>, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }

    fn check(&self, upload: &FileUpload) -> Result<(), UploadError> {
        if upload.bytes.is_empty() {
            return Err(UploadError::NoFile);
        }
        if !self.policy.allows_content_type(&upload.content_type) {
            return Err(UploadError::InvalidFileType(upload.content_type.clone()));
        }
        if !self.policy.allows_size(upload.bytes.len() as u64) {
            return Err(UploadError::FileTooLarge {
                limit_bytes: self.policy.max_file_size_bytes,
            });
        }
        if upload.file_name.chars().count() > self.policy.max_file_name_len {
            return Err(UploadError::InvalidFileName);
        }
        Ok(())
    }
}

fn map_storage_err(e: StorageError) -> UploadError {
    match e {
        StorageError::NotFound => UploadError::NotFound,
        StorageError::Unavailable(msg) => UploadError::Storage(msg),
    }
}

#[async_trait]
impl UploadFileUseCase for UploadService {
    async fn execute(&self, upload: FileUpload) -> Result<UploadedFile, UploadError> {
        self.check(&upload)?;

        let name = object_name(Utc::now().timestamp_millis(), &upload.file_name);
        let size = upload.bytes.len() as u64;
        let content_type = upload.content_type.trim().to_ascii_lowercase();

        self.storage
            .put_public_object(&name, &content_type, upload.bytes)
            .await
            .map_err(map_storage_err)?;

        info!(object = %name, size, "File uploaded");

        Ok(UploadedFile {
            url: public_url(&self.policy.bucket_name, &name),
            file_name: name,
            content_type,
            size,
        })
    }
}

#[async_trait]
impl DeleteFileUseCase for UploadService {
    async fn execute(&self, object_name: &str) -> Result<(), UploadError> {
        if !is_valid_object_name(object_name) {
            return Err(UploadError::InvalidFileName);
        }

        self.storage
            .delete_object(object_name)
            .await
            .map_err(map_storage_err)
    }
}
