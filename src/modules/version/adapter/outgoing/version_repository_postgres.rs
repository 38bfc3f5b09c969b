use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, TryInsertResult};
use std::sync::Arc;
use tracing::debug;

use crate::modules::version::adapter::outgoing::sea_orm_entity::site_version::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::version::application::domain::entities::{VersionRecord, VERSION_RECORD_ID};
use crate::modules::version::application::ports::outgoing::version_repository::{
    VersionRepository, VersionRepositoryError,
};

#[derive(Clone)]
pub struct VersionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VersionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn row(version: &str) -> ActiveModel {
    ActiveModel {
        id: Set(VERSION_RECORD_ID.to_string()),
        version: Set(version.to_string()),
        last_updated: Set(Utc::now().fixed_offset()),
    }
}

#[async_trait]
impl VersionRepository for VersionRepositoryPostgres {
    async fn get(&self) -> Result<Option<VersionRecord>, VersionRepositoryError> {
        let found = Entity::find_by_id(VERSION_RECORD_ID.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(model_to_record))
    }

    async fn seed(&self, version: &str) -> Result<VersionRecord, VersionRepositoryError> {
        let inserted = Entity::insert(row(version))
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .do_nothing()
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let TryInsertResult::Conflicted = inserted {
            debug!("Version row already present, keeping it");
        }

        self.get().await?.ok_or_else(|| {
            VersionRepositoryError::DatabaseError("version row missing after seed".to_string())
        })
    }

    async fn put(&self, version: &str) -> Result<VersionRecord, VersionRepositoryError> {
        let saved = Entity::insert(row(version))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Version, Column::LastUpdated])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_record(saved))
    }
}

fn model_to_record(model: site_version::Model) -> VersionRecord {
    VersionRecord {
        version: model.version,
        last_updated: model.last_updated.into(),
    }
}

fn map_db_err(e: DbErr) -> VersionRepositoryError {
    VersionRepositoryError::DatabaseError(e.to_string())
}
