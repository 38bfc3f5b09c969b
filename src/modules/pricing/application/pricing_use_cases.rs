use std::sync::Arc;

use crate::modules::pricing::application::ports::incoming::use_cases::{
    CreatePricingPlanUseCase, DeletePricingPlanUseCase, GetPricingPlanUseCase,
    ListPricingPlansUseCase, UpdatePricingPlanUseCase,
};
use crate::modules::pricing::application::ports::outgoing::pricing_repository::PricingRepository;
use crate::modules::pricing::application::service::PricingService;

#[derive(Clone)]
pub struct PricingUseCases {
    pub list: Arc<dyn ListPricingPlansUseCase + Send + Sync>,
    pub get: Arc<dyn GetPricingPlanUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePricingPlanUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePricingPlanUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePricingPlanUseCase + Send + Sync>,
}

impl PricingUseCases {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: PricingRepository + 'static,
    {
        let service = Arc::new(PricingService::new(repository));
        Self {
            list: service.clone(),
            get: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}
