// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Stored as JSONB in DB (array of strings)
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub category: ProjectCategory,
}

/// Merge semantics:
/// - title/description: None => keep (blank input is dropped before this point)
/// - technologies: Some(vec) => replace whole array
/// - image/github_url/live_url: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: PatchField<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: PatchField<String>,
    pub live_url: PatchField<String>,
    pub category: Option<ProjectCategory>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: CreateProjectData)
        -> Result<Project, ProjectRepositoryError>;

    async fn update_project(
        &self,
        project_id: Uuid,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
