use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQueryError,
};

#[derive(Debug, Clone)]
pub enum GetProjectsError {
    QueryError(String),
}

impl fmt::Display for GetProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectsError::QueryError(msg) => write!(f, "query error: {}", msg),
        }
    }
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(e: ProjectQueryError) -> Self {
        GetProjectsError::QueryError(e.to_string())
    }
}

/// Public listing, newest first.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError>;
}
