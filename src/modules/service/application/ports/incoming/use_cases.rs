use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::outgoing::service_repository::{
    ServiceChanges, ServiceRepositoryError,
};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Service not found")]
    NotFound,

    #[error("repository error: {0}")]
    Repository(String),
}

impl From<ServiceRepositoryError> for ServiceError {
    fn from(e: ServiceRepositoryError) -> Self {
        match e {
            ServiceRepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceDraft {
    pub name: Option<String>,
    pub price_usd: Option<f64>,
    pub turnaround: Option<String>,
    pub is_starting_price: Option<bool>,
    pub is_monthly: Option<bool>,
}

/// Seeds the default catalogue when nothing is stored yet.
#[async_trait]
pub trait ListServicesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ServiceOffering>, ServiceError>;
}

#[async_trait]
pub trait GetServiceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ServiceOffering, ServiceError>;
}

#[async_trait]
pub trait CreateServiceUseCase: Send + Sync {
    async fn execute(&self, draft: ServiceDraft) -> Result<ServiceOffering, ServiceError>;
}

#[async_trait]
pub trait UpdateServiceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        changes: ServiceChanges,
    ) -> Result<ServiceOffering, ServiceError>;
}

#[async_trait]
pub trait DeleteServiceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ServiceError>;
}
