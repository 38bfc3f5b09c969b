use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::service::application::domain::default_services::default_services;
use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::incoming::use_cases::{
    CreateServiceUseCase, DeleteServiceUseCase, GetServiceUseCase, ListServicesUseCase,
    ServiceDraft, ServiceError, UpdateServiceUseCase,
};
use crate::modules::service::application::ports::outgoing::service_repository::{
    NewService, ServiceChanges, ServiceRepository,
};
use crate::shared::validation::{RequiredFields, ValidationError};

pub struct ServiceCatalogService<R>
where
    R: ServiceRepository,
{
    repository: R,
}

impl<R> ServiceCatalogService<R>
where
    R: ServiceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn check_price(price: f64) -> Result<f64, ValidationError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(ValidationError::Invalid(
            "priceUSD must be a positive number".to_string(),
        ))
    }
}

#[async_trait]
impl<R> ListServicesUseCase for ServiceCatalogService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ServiceOffering>, ServiceError> {
        let services = self.repository.list().await?;
        if !services.is_empty() {
            return Ok(services);
        }

        info!("Services collection empty, storing default catalogue");
        Ok(self.repository.create_many(default_services()).await?)
    }
}

#[async_trait]
impl<R> GetServiceUseCase for ServiceCatalogService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ServiceOffering, ServiceError> {
        Ok(self.repository.get(id).await?)
    }
}

#[async_trait]
impl<R> CreateServiceUseCase for ServiceCatalogService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, draft: ServiceDraft) -> Result<ServiceOffering, ServiceError> {
        RequiredFields::new()
            .text("name", draft.name.as_deref())
            .present("priceUSD", draft.price_usd.as_ref())
            .text("turnaround", draft.turnaround.as_deref())
            .finish()?;

        let service = NewService {
            name: draft.name.unwrap_or_default().trim().to_string(),
            price_usd: check_price(draft.price_usd.unwrap_or_default())?,
            turnaround: draft.turnaround.unwrap_or_default(),
            is_starting_price: draft.is_starting_price.unwrap_or(false),
            is_monthly: draft.is_monthly.unwrap_or(false),
        };

        Ok(self.repository.create(service).await?)
    }
}

#[async_trait]
impl<R> UpdateServiceUseCase for ServiceCatalogService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        mut changes: ServiceChanges,
    ) -> Result<ServiceOffering, ServiceError> {
        if let Some(price) = changes.price_usd {
            changes.price_usd = Some(check_price(price)?);
        }
        Ok(self.repository.update(id, changes).await?)
    }
}

#[async_trait]
impl<R> DeleteServiceUseCase for ServiceCatalogService<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ServiceError> {
        Ok(self.repository.delete(id).await?)
    }
}
