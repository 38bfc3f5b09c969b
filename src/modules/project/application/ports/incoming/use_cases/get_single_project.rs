use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;

#[derive(Debug, Clone)]
pub enum GetSingleProjectError {
    NotFound,
    QueryError(String),
}

impl fmt::Display for GetSingleProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleProjectError::NotFound => write!(f, "project not found"),
            GetSingleProjectError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

impl From<ProjectQueryError> for GetSingleProjectError {
    fn from(e: ProjectQueryError) -> Self {
        match e {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            other => GetSingleProjectError::QueryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetSingleProjectError>;
}
