use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::resume_repository_postgres::{
    ensure_deleted, from_json, map_db_err, to_json, ResumeRepositoryPostgres,
};
use crate::modules::resume::adapter::outgoing::sea_orm_entity::resume_skills::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::resume::application::domain::entities::SkillCategory;
use crate::modules::resume::application::domain::inputs::{
    NewSkillCategory, SkillCategoryChanges,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    ResumeRepository, ResumeRepositoryError,
};

fn to_entry(model: resume_skills::Model) -> Result<SkillCategory, ResumeRepositoryError> {
    Ok(SkillCategory {
        id: model.id,
        category: model.category,
        items: from_json(model.items)?,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[async_trait]
impl ResumeRepository<SkillCategory> for ResumeRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SkillCategory>, ResumeRepositoryError> {
        Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_entry)
            .collect()
    }

    async fn get(&self, id: Uuid) -> Result<SkillCategory, ResumeRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ResumeRepositoryError::NotFound)?;
        to_entry(model)
    }

    async fn create(
        &self,
        entry: NewSkillCategory,
    ) -> Result<SkillCategory, ResumeRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(entry.category),
            items: Set(to_json(&entry.items)?),
            sort_order: Set(entry.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        to_entry(model.insert(&*self.db).await.map_err(map_db_err)?)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: SkillCategoryChanges,
    ) -> Result<SkillCategory, ResumeRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(v) = changes.category {
            model.category = Set(v);
        }
        if let Some(v) = changes.items {
            model.items = Set(to_json(&v)?);
        }
        if let Some(v) = changes.order {
            model.sort_order = Set(v);
        }

        let row = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ResumeRepositoryError::NotFound)?;

        to_entry(row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        ensure_deleted(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    #[tokio::test]
    async fn corrupt_items_column_is_serialization_error() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![resume_skills::Model {
                id: Uuid::new_v4(),
                category: "Mobile".into(),
                items: serde_json::json!("Flutter"),
                sort_order: 0,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();
        let repo = ResumeRepositoryPostgres::new(Arc::new(db));

        let err = ResumeRepository::<SkillCategory>::list(&repo)
            .await
            .unwrap_err();

        assert!(matches!(err, ResumeRepositoryError::SerializationError(_)));
    }

    #[tokio::test]
    async fn create_stores_items_array() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![resume_skills::Model {
                id: Uuid::new_v4(),
                category: "Mobile".into(),
                items: serde_json::json!(["Flutter", "Kotlin"]),
                sort_order: 1,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();
        let repo = ResumeRepositoryPostgres::new(Arc::new(db));

        let created = ResumeRepository::<SkillCategory>::create(
            &repo,
            NewSkillCategory {
                category: "Mobile".into(),
                items: vec!["Flutter".into(), "Kotlin".into()],
                order: 1,
            },
        )
        .await
        .unwrap();

        assert_eq!(created.items, vec!["Flutter", "Kotlin"]);
    }
}
