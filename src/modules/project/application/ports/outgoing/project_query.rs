// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectCategory};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub category: Option<ProjectCategory>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError>;

    /// Newest first
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError>;
}
