use sea_orm::{DatabaseConnection, DbErr, DeleteResult};
use std::sync::Arc;

use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRepositoryError;

/// Postgres storage for every resume section, one table per section.
#[derive(Clone)]
pub struct ResumeRepositoryPostgres {
    pub(super) db: Arc<DatabaseConnection>,
}

impl ResumeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn map_db_err(e: DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}

pub(super) fn to_json(list: &[String]) -> Result<serde_json::Value, ResumeRepositoryError> {
    serde_json::to_value(list).map_err(|e| ResumeRepositoryError::SerializationError(e.to_string()))
}

pub(super) fn from_json(value: serde_json::Value) -> Result<Vec<String>, ResumeRepositoryError> {
    serde_json::from_value(value)
        .map_err(|e| ResumeRepositoryError::SerializationError(e.to_string()))
}

pub(super) fn ensure_deleted(res: DeleteResult) -> Result<(), ResumeRepositoryError> {
    if res.rows_affected == 0 {
        return Err(ResumeRepositoryError::NotFound);
    }
    Ok(())
}
