use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::resume_repository_postgres::{ensure_deleted, map_db_err, ResumeRepositoryPostgres};
use crate::modules::resume::adapter::outgoing::sea_orm_entity::resume_certifications::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::resume::application::domain::entities::Certification;
use crate::modules::resume::application::domain::inputs::{
    CertificationChanges, NewCertification,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    ResumeRepository, ResumeRepositoryError,
};

fn to_entry(model: resume_certifications::Model) -> Certification {
    Certification {
        id: model.id,
        name: model.name,
        issuer: model.issuer,
        date: model.issued_on,
        pdf_url: model.pdf_url,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl ResumeRepository<Certification> for ResumeRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Certification>, ResumeRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(to_entry).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Certification, ResumeRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_entry)
            .ok_or(ResumeRepositoryError::NotFound)
    }

    async fn create(
        &self,
        entry: NewCertification,
    ) -> Result<Certification, ResumeRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(entry.name),
            issuer: Set(entry.issuer),
            issued_on: Set(entry.date),
            pdf_url: Set(entry.pdf_url),
            sort_order: Set(entry.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(to_entry(model.insert(&*self.db).await.map_err(map_db_err)?))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: CertificationChanges,
    ) -> Result<Certification, ResumeRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(v) = changes.name {
            model.name = Set(v);
        }
        if let Some(v) = changes.issuer {
            model.issuer = Set(v);
        }
        if let Some(v) = changes.date {
            model.issued_on = Set(v);
        }
        if let Some(v) = changes.pdf_url {
            model.pdf_url = Set(v);
        }
        if let Some(v) = changes.order {
            model.sort_order = Set(v);
        }

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(to_entry)
            .ok_or(ResumeRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        ensure_deleted(res)
    }
}
