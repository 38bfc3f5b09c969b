use std::sync::Arc;

use crate::modules::service::application::ports::incoming::use_cases::{
    CreateServiceUseCase, DeleteServiceUseCase, GetServiceUseCase, ListServicesUseCase,
    UpdateServiceUseCase,
};
use crate::modules::service::application::ports::outgoing::service_repository::ServiceRepository;
use crate::modules::service::application::service::ServiceCatalogService;

#[derive(Clone)]
pub struct ServiceUseCases {
    pub list: Arc<dyn ListServicesUseCase + Send + Sync>,
    pub get: Arc<dyn GetServiceUseCase + Send + Sync>,
    pub create: Arc<dyn CreateServiceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateServiceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteServiceUseCase + Send + Sync>,
}

impl ServiceUseCases {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ServiceRepository + 'static,
    {
        let service = Arc::new(ServiceCatalogService::new(repository));
        Self {
            list: service.clone(),
            get: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}
