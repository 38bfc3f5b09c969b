use std::sync::Arc;

use crate::modules::media::application::domain::upload_policy::UploadPolicy;
use crate::modules::media::application::ports::incoming::use_cases::{
    DeleteFileUseCase, UploadFileUseCase,
};
use crate::modules::media::application::ports::outgoing::ObjectStorage;
use crate::modules::media::application::service::UploadService;

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn UploadFileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteFileUseCase + Send + Sync>,
    /// Read by the multipart handler to stop streaming early.
    pub policy: UploadPolicy,
}

impl MediaUseCases {
    pub fn new(storage: Arc<dyn ObjectStorage + Send + Sync>, policy: UploadPolicy) -> Self {
        let service = Arc::new(UploadService::new(storage, policy.clone()));
        Self {
            upload: service.clone(),
            delete: service,
            policy,
        }
    }
}
