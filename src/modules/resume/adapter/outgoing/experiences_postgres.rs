use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::resume_repository_postgres::{
    ensure_deleted, from_json, map_db_err, to_json, ResumeRepositoryPostgres,
};
use crate::modules::resume::adapter::outgoing::sea_orm_entity::resume_experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::resume::application::domain::entities::Experience;
use crate::modules::resume::application::domain::inputs::{ExperienceChanges, NewExperience};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    ResumeRepository, ResumeRepositoryError,
};

fn to_entry(model: resume_experiences::Model) -> Result<Experience, ResumeRepositoryError> {
    Ok(Experience {
        id: model.id,
        title: model.title,
        company: model.company,
        period: model.period,
        description: model.description,
        achievements: from_json(model.achievements)?,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[async_trait]
impl ResumeRepository<Experience> for ResumeRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ResumeRepositoryError> {
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

    async fn get(&self, id: Uuid) -> Result<Experience, ResumeRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ResumeRepositoryError::NotFound)?;
        to_entry(model)
    }

    async fn create(&self, entry: NewExperience) -> Result<Experience, ResumeRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(entry.title),
            company: Set(entry.company),
            period: Set(entry.period),
            description: Set(entry.description),
            achievements: Set(to_json(&entry.achievements)?),
            sort_order: Set(entry.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        to_entry(model.insert(&*self.db).await.map_err(map_db_err)?)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ResumeRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(v) = changes.title {
            model.title = Set(v);
        }
        if let Some(v) = changes.company {
            model.company = Set(v);
        }
        if let Some(v) = changes.period {
            model.period = Set(v);
        }
        if let Some(v) = changes.description {
            model.description = Set(v);
        }
        if let Some(v) = changes.achievements {
            model.achievements = Set(to_json(&v)?);
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
