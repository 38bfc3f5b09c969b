use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::pricing::adapter::outgoing::sea_orm_entity::pricing_plans::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::pricing::application::domain::entities::{BillingPeriod, PricingPlan};
use crate::modules::pricing::application::ports::outgoing::pricing_repository::{
    NewPricingPlan, PricingPlanChanges, PricingRepository, PricingRepositoryError,
};

#[derive(Clone)]
pub struct PricingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PricingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PricingRepository for PricingRepositoryPostgres {
    async fn list(&self) -> Result<Vec<PricingPlan>, PricingRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Price)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_plan).collect()
    }

    async fn get(&self, id: Uuid) -> Result<PricingPlan, PricingRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PricingRepositoryError::NotFound)?;

        model_to_plan(row)
    }

    async fn create(&self, plan: NewPricingPlan) -> Result<PricingPlan, PricingRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(plan.name),
            price: Set(plan.price),
            period: Set(plan.period.as_str().to_string()),
            description: Set(plan.description),
            features: Set(to_json(&plan.features)?),
            popular: Set(plan.popular),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_plan(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: PricingPlanChanges,
    ) -> Result<PricingPlan, PricingRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(name) = changes.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(price) = changes.price {
            model.price = Set(price);
        }
        if let Some(period) = changes.period {
            model.period = Set(period.as_str().to_string());
        }
        if let Some(description) = changes.description {
            model.description = Set(description);
        }
        if let Some(features) = changes.features {
            model.features = Set(to_json(&features)?);
        }
        if let Some(popular) = changes.popular {
            model.popular = Set(popular);
        }

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(PricingRepositoryError::NotFound)?;

        model_to_plan(row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), PricingRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(PricingRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_plan(model: pricing_plans::Model) -> Result<PricingPlan, PricingRepositoryError> {
    Ok(PricingPlan {
        id: model.id,
        name: model.name,
        price: model.price,
        period: BillingPeriod::from_stored(&model.period),
        description: model.description,
        features: serde_json::from_value(model.features)
            .map_err(|e| PricingRepositoryError::SerializationError(e.to_string()))?,
        popular: model.popular,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json(features: &[String]) -> Result<serde_json::Value, PricingRepositoryError> {
    serde_json::to_value(features)
        .map_err(|e| PricingRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> PricingRepositoryError {
    PricingRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn plan_row(name: &str, price: f64, period: &str) -> pricing_plans::Model {
        let now = Utc::now().fixed_offset();
        pricing_plans::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            period: period.to_string(),
            description: "...".to_string(),
            features: serde_json::json!(["A", "B"]),
            popular: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                plan_row("Starter", 499.0, "project"),
                plan_row("Retainer", 1200.0, "month"),
            ]])
            .into_connection();

        let repo = PricingRepositoryPostgres::new(Arc::new(db));
        let plans = repo.list().await.unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].name, "Starter");
        assert_eq!(plans[1].period, BillingPeriod::Month);
        assert_eq!(plans[0].features, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn get_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<pricing_plans::Model>::new()])
            .into_connection();

        let repo = PricingRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.get(Uuid::new_v4()).await.unwrap_err(),
            PricingRepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn create_returns_inserted_row() {
        let row = plan_row("Starter", 499.0, "project");
        let id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PricingRepositoryPostgres::new(Arc::new(db));
        let plan = repo
            .create(NewPricingPlan {
                name: "Starter".into(),
                price: 499.0,
                period: BillingPeriod::Project,
                description: "...".into(),
                features: vec!["A".into(), "B".into()],
                popular: false,
            })
            .await
            .unwrap();

        assert_eq!(plan.id, id);
        assert_eq!(plan.price, 499.0);
    }

    #[tokio::test]
    async fn update_without_match_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<pricing_plans::Model>::new()])
            .into_connection();

        let repo = PricingRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .update(
                Uuid::new_v4(),
                PricingPlanChanges {
                    popular: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PricingRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_reports_not_found_and_db_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_exec_errors(vec![DbErr::Custom("broken pipe".into())])
            .into_connection();

        let repo = PricingRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete(Uuid::new_v4()).await.unwrap_err(),
            PricingRepositoryError::NotFound
        ));
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await.unwrap_err(),
            PricingRepositoryError::DatabaseError(_)
        ));
    }
}
