use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::UpdateProjectData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::shared::validation::non_blank;
use crate::AppState;

/// Omitted fields keep their stored value. `null` or a blank string clears
/// the image and link fields.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image: PatchField<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub live_url: PatchField<String>,
    pub category: Option<ProjectCategory>,
}

impl From<UpdateProjectRequest> for UpdateProjectData {
    fn from(req: UpdateProjectRequest) -> Self {
        UpdateProjectData {
            title: non_blank(req.title),
            description: non_blank(req.description),
            image: req.image.blank_as_null(),
            technologies: req.technologies,
            github_url: req.github_url.blank_as_null(),
            live_url: req.live_url.blank_as_null(),
            category: req.category,
        }
    }
}

/// Update a project
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .update
        .execute(project_id, req.into_inner().into())
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Failed to update project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{auth_gate, bearer, ADMIN_TOKEN, VISITOR_TOKEN};
    use crate::tests::support::project_test_fixtures::sample_project;

    /* --------------------------------------------------
     * Mock Update Project Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockUpdateProjectUseCase {
        result: Result<Project, UpdateProjectError>,
        received: Arc<Mutex<Option<UpdateProjectData>>>,
    }

    impl MockUpdateProjectUseCase {
        fn returning(result: Result<Project, UpdateProjectError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl UpdateProjectUseCase for MockUpdateProjectUseCase {
        async fn execute(
            &self,
            _project_id: Uuid,
            data: UpdateProjectData,
        ) -> Result<Project, UpdateProjectError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }
    }

    async fn call(uc: MockUpdateProjectUseCase, token: &str, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_update_project_use_case(uc)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth_gate())
                .app_data(custom_json_config())
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .insert_header(bearer(token))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    /* --------------------------------------------------
     * Merge semantics
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_update_project_partial_body_keeps_omitted_fields() {
        let uc = MockUpdateProjectUseCase::returning(Ok(sample_project(Uuid::new_v4())));
        let received = uc.received.clone();

        let (status, body) = call(uc, ADMIN_TOKEN, json!({ "title": "Renamed" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let data = received.lock().unwrap().clone().unwrap();
        assert_eq!(data.title.as_deref(), Some("Renamed"));
        assert!(data.description.is_none());
        assert!(data.image.is_unset());
        assert!(data.github_url.is_unset());
        assert!(data.technologies.is_none());
    }

    #[actix_web::test]
    async fn test_update_project_blank_and_null_clear_links() {
        let uc = MockUpdateProjectUseCase::returning(Ok(sample_project(Uuid::new_v4())));
        let received = uc.received.clone();

        let (status, _) = call(
            uc,
            ADMIN_TOKEN,
            json!({ "title": "   ", "githubUrl": "", "liveUrl": null, "image": "https://cdn/x.png" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);

        let data = received.lock().unwrap().clone().unwrap();
        assert!(data.title.is_none());
        assert_eq!(data.github_url, PatchField::Null);
        assert_eq!(data.live_url, PatchField::Null);
        assert_eq!(data.image, PatchField::Value("https://cdn/x.png".to_string()));
    }

    /* --------------------------------------------------
     * Error Cases
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_update_project_not_found() {
        let uc = MockUpdateProjectUseCase::returning(Err(UpdateProjectError::NotFound));

        let (status, body) = call(uc, ADMIN_TOKEN, json!({ "title": "X" })).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_update_project_repository_error() {
        let uc = MockUpdateProjectUseCase::returning(Err(UpdateProjectError::RepositoryError(
            "boom".into(),
        )));

        let (status, _) = call(uc, ADMIN_TOKEN, json!({ "title": "X" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_update_project_non_admin_forbidden() {
        let uc = MockUpdateProjectUseCase::returning(Ok(sample_project(Uuid::new_v4())));
        let received = uc.received.clone();

        let (status, _) = call(uc, VISITOR_TOKEN, json!({ "title": "X" })).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(received.lock().unwrap().is_none());
    }
}
