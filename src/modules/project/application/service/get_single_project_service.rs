use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetSingleProjectError> {
        self.query
            .get_by_id(project_id)
            .await
            .map_err(GetSingleProjectError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::outgoing::project_query::{
        ProjectListFilter, ProjectQueryError,
    };
    use crate::tests::support::project_test_fixtures::sample_project;

    struct MockProjectQuery {
        result: Result<Project, ProjectQueryError>,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn get_by_id(&self, _project_id: Uuid) -> Result<Project, ProjectQueryError> {
            self.result.clone()
        }

        async fn list(
            &self,
            _filter: ProjectListFilter,
        ) -> Result<Vec<Project>, ProjectQueryError> {
            unimplemented!("not needed for single project tests")
        }
    }

    #[tokio::test]
    async fn returns_project() {
        let id = Uuid::new_v4();
        let service = GetSingleProjectService::new(MockProjectQuery {
            result: Ok(sample_project(id)),
        });

        assert_eq!(service.execute(id).await.unwrap().id, id);
    }

    #[tokio::test]
    async fn maps_not_found() {
        let service = GetSingleProjectService::new(MockProjectQuery {
            result: Err(ProjectQueryError::NotFound),
        });

        let err = service.execute(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, GetSingleProjectError::NotFound));
    }

    #[tokio::test]
    async fn maps_serialization_error_to_query_error() {
        let service = GetSingleProjectService::new(MockProjectQuery {
            result: Err(ProjectQueryError::SerializationError("bad".to_string())),
        });

        let err = service.execute(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, GetSingleProjectError::QueryError(_)));
    }
}
