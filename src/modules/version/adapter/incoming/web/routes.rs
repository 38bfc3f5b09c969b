use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::version::application::domain::entities::VersionRecord;
use crate::modules::version::application::ports::incoming::use_cases::VersionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVersionRequest {
    #[schema(example = "1.4.2")]
    pub version: Option<String>,
}

fn error_response(err: VersionError, action: &str) -> HttpResponse {
    match err {
        VersionError::Validation(e) => ApiResponse::validation_error(&e.to_string()),
        VersionError::Unavailable(e) => {
            error!("Failed to {} version: {}", action, e);
            ApiResponse::internal_error()
        }
    }
}

/// Current site version
#[utoipa::path(
    get,
    path = "/api/version",
    tag = "version",
    responses(
        (status = 200, description = "Current version", body = inline(SuccessResponse<VersionRecord>)),
        (status = 500, description = "Neither the database nor the local file is readable", body = ErrorResponse)
    )
)]
#[get("/api/version")]
pub async fn get_version_handler(data: web::Data<AppState>) -> impl Responder {
    match data.version.get.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => error_response(e, "fetch"),
    }
}

/// Set the site version
#[utoipa::path(
    post,
    path = "/api/version",
    tag = "version",
    security(("BearerAuth" = [])),
    request_body = UpdateVersionRequest,
    responses(
        (status = 200, description = "Version stored", body = inline(SuccessResponse<VersionRecord>)),
        (status = 400, description = "Missing or non-semantic version", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/version")]
pub async fn update_version_handler(
    _admin: AdminUser,
    req: web::Json<UpdateVersionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.version.update.execute(req.into_inner().version).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => error_response(e, "update"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::version::application::ports::incoming::use_cases::{
        GetVersionUseCase, UpdateVersionUseCase,
    };
    use crate::modules::version::application::version_use_cases::VersionUseCases;
    use crate::shared::api::custom_json_config;
    use crate::shared::validation::ValidationError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{auth_gate, bearer, ADMIN_TOKEN, VISITOR_TOKEN};

    #[derive(Default)]
    struct MockVersion {
        current: Mutex<Option<String>>,
        unavailable: bool,
    }

    #[async_trait]
    impl GetVersionUseCase for MockVersion {
        async fn execute(&self) -> Result<VersionRecord, VersionError> {
            if self.unavailable {
                return Err(VersionError::Unavailable("db and file down".into()));
            }
            let version = self
                .current
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| "1.0.0".to_string());
            Ok(VersionRecord {
                version,
                last_updated: Utc::now(),
            })
        }
    }

    #[async_trait]
    impl UpdateVersionUseCase for MockVersion {
        async fn execute(&self, version: Option<String>) -> Result<VersionRecord, VersionError> {
            match version {
                Some(v) if v.split('.').count() == 3 => {
                    *self.current.lock().unwrap() = Some(v.clone());
                    Ok(VersionRecord {
                        version: v,
                        last_updated: Utc::now(),
                    })
                }
                Some(v) => Err(ValidationError::Invalid(format!("'{v}' is not semver")).into()),
                None => Err(ValidationError::MissingFields(vec!["version"]).into()),
            }
        }
    }

    fn use_cases(mock: MockVersion) -> VersionUseCases {
        let mock = Arc::new(mock);
        VersionUseCases {
            get: mock.clone(),
            update: mock,
        }
    }

    macro_rules! version_app {
        ($mock:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_version(use_cases($mock))
                            .build(),
                    )
                    .app_data(auth_gate())
                    .app_data(custom_json_config())
                    .service(get_version_handler)
                    .service(update_version_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_get_returns_version() {
        let app = version_app!(MockVersion::default());

        let req = test::TestRequest::get().uri("/api/version").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["version"], "1.0.0");
        assert!(body["data"]["lastUpdated"].is_string());
    }

    #[actix_web::test]
    async fn test_update_then_get_reflects_new_version() {
        let app = version_app!(MockVersion::default());

        let req = test::TestRequest::post()
            .uri("/api/version")
            .insert_header(bearer(ADMIN_TOKEN))
            .set_json(json!({ "version": "1.5.0" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/version").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["data"]["version"], "1.5.0");
    }

    #[actix_web::test]
    async fn test_missing_version_is_bad_request() {
        let app = version_app!(MockVersion::default());

        let req = test::TestRequest::post()
            .uri("/api/version")
            .insert_header(bearer(ADMIN_TOKEN))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Missing required fields: version");
    }

    #[actix_web::test]
    async fn test_visitor_cannot_update() {
        let app = version_app!(MockVersion::default());

        let req = test::TestRequest::post()
            .uri("/api/version")
            .insert_header(bearer(VISITOR_TOKEN))
            .set_json(json!({ "version": "9.9.9" }))
            .to_request();

        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_unavailable_is_internal_error() {
        let app = version_app!(MockVersion {
            unavailable: true,
            ..Default::default()
        });

        let req = test::TestRequest::get().uri("/api/version").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
