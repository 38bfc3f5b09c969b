// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError> {
        let project = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        model_to_project(project)
    }

    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError> {
        let mut query = Entity::find();

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }

        let projects = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        projects.into_iter().map(model_to_project).collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectQueryError> {
    let technologies = serde_json::from_value(model.technologies)
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))?;

    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        image: model.image,
        technologies,
        github_url: model.github_url,
        live_url: model.live_url,
        category: ProjectCategory::from_stored(&model.category),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(title: &str, category: &str, age_minutes: i64) -> projects::Model {
        let at = (Utc::now() - Duration::minutes(age_minutes)).fixed_offset();
        projects::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            image: None,
            technologies: serde_json::json!([]),
            github_url: None,
            live_url: None,
            category: category.to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn get_by_id_returns_project() {
        let m = model("One", "personal", 0);
        let id = m.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![m]])
            .into_connection();

        let q = ProjectQueryPostgres::new(Arc::new(db));
        let p = q.get_by_id(id).await.unwrap();

        assert_eq!(p.id, id);
        assert_eq!(p.category, ProjectCategory::Personal);
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let q = ProjectQueryPostgres::new(Arc::new(db));
        let err = q.get_by_id(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, ProjectQueryError::NotFound));
    }

    #[tokio::test]
    async fn list_maps_rows_in_database_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model("Newer", "client", 1),
                model("Older", "client", 60),
            ]])
            .into_connection();

        let q = ProjectQueryPostgres::new(Arc::new(db));
        let items = q
            .list(ProjectListFilter {
                category: Some(ProjectCategory::Client),
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Newer");
    }

    #[tokio::test]
    async fn list_propagates_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("gone".to_string())])
            .into_connection();

        let q = ProjectQueryPostgres::new(Arc::new(db));
        let err = q.list(ProjectListFilter::default()).await.unwrap_err();

        assert!(matches!(err, ProjectQueryError::DatabaseError(_)));
    }
}
