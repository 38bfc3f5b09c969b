use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::service::application::domain::entities::ServiceOffering;

#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub price_usd: f64,
    pub turnaround: String,
    pub is_starting_price: bool,
    pub is_monthly: bool,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceChanges {
    pub name: Option<String>,
    pub price_usd: Option<f64>,
    pub turnaround: Option<String>,
    pub is_starting_price: Option<bool>,
    pub is_monthly: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceRepositoryError {
    #[error("Service not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Oldest first.
    async fn list(&self) -> Result<Vec<ServiceOffering>, ServiceRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<ServiceOffering, ServiceRepositoryError>;

    async fn create(&self, service: NewService) -> Result<ServiceOffering, ServiceRepositoryError>;

    /// Inserts all rows in one statement, preserving input order.
    async fn create_many(
        &self,
        services: Vec<NewService>,
    ) -> Result<Vec<ServiceOffering>, ServiceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: ServiceChanges,
    ) -> Result<ServiceOffering, ServiceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ServiceRepositoryError>;
}
