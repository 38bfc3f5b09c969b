use std::sync::Arc;

use crate::modules::version::application::ports::incoming::use_cases::{
    GetVersionUseCase, UpdateVersionUseCase,
};
use crate::modules::version::application::ports::outgoing::version_file::VersionFile;
use crate::modules::version::application::ports::outgoing::version_repository::VersionRepository;
use crate::modules::version::application::service::VersionService;

#[derive(Clone)]
pub struct VersionUseCases {
    pub get: Arc<dyn GetVersionUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateVersionUseCase + Send + Sync>,
}

impl VersionUseCases {
    pub fn new<R, F>(repository: R, file: F) -> Self
    where
        R: VersionRepository + 'static,
        F: VersionFile + 'static,
    {
        let service = Arc::new(VersionService::new(repository, file));
        Self {
            get: service.clone(),
            update: service,
        }
    }
}
