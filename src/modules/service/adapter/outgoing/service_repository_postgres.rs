use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::service::adapter::outgoing::sea_orm_entity::services::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::outgoing::service_repository::{
    NewService, ServiceChanges, ServiceRepository, ServiceRepositoryError,
};

#[derive(Clone)]
pub struct ServiceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn new_row(service: NewService, at: DateTime<FixedOffset>) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(service.name),
        price_usd: Set(service.price_usd),
        turnaround: Set(service.turnaround),
        is_starting_price: Set(service.is_starting_price),
        is_monthly: Set(service.is_monthly),
        created_at: Set(at),
        updated_at: Set(at),
    }
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ServiceOffering>, ServiceRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_service).collect())
    }

    async fn get(&self, id: Uuid) -> Result<ServiceOffering, ServiceRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_service)
            .ok_or(ServiceRepositoryError::NotFound)
    }

    async fn create(&self, service: NewService) -> Result<ServiceOffering, ServiceRepositoryError> {
        let row = new_row(service, Utc::now().fixed_offset())
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_service(row))
    }

    async fn create_many(
        &self,
        services: Vec<NewService>,
    ) -> Result<Vec<ServiceOffering>, ServiceRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let start = Utc::now().fixed_offset();

        let mut created = Vec::with_capacity(services.len());
        // distinct timestamps keep the catalogue order under created_at sorting
        for (i, service) in services.into_iter().enumerate() {
            let at = start + Duration::microseconds(i as i64);
            let row = new_row(service, at).insert(&txn).await.map_err(map_db_err)?;
            created.push(model_to_service(row));
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(created)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ServiceChanges,
    ) -> Result<ServiceOffering, ServiceRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(name) = changes.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(price) = changes.price_usd {
            model.price_usd = Set(price);
        }
        if let Some(turnaround) = changes.turnaround {
            model.turnaround = Set(turnaround);
        }
        if let Some(flag) = changes.is_starting_price {
            model.is_starting_price = Set(flag);
        }
        if let Some(flag) = changes.is_monthly {
            model.is_monthly = Set(flag);
        }

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(model_to_service)
            .ok_or(ServiceRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ServiceRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn model_to_service(model: services::Model) -> ServiceOffering {
    ServiceOffering {
        id: model.id,
        name: model.name,
        price_usd: model.price_usd,
        turnaround: model.turnaround,
        is_starting_price: model.is_starting_price,
        is_monthly: model.is_monthly,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ServiceRepositoryError {
    ServiceRepositoryError::DatabaseError(e.to_string())
}
