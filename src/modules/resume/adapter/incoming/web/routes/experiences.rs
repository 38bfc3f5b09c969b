use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::section_handlers;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::resume::application::domain::entities::Experience;
use crate::modules::resume::application::domain::inputs::{ExperienceChanges, ExperienceDraft};
use crate::shared::api::DeleteConfirmation;
use crate::shared::validation::non_blank;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequest {
    #[schema(example = "Senior Mobile Developer")]
    pub title: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl From<ExperienceRequest> for ExperienceDraft {
    fn from(req: ExperienceRequest) -> Self {
        ExperienceDraft {
            title: req.title,
            company: req.company,
            period: req.period,
            description: req.description,
            achievements: req.achievements,
            order: req.order,
        }
    }
}

impl From<ExperienceRequest> for ExperienceChanges {
    fn from(req: ExperienceRequest) -> Self {
        ExperienceChanges {
            title: non_blank(req.title),
            company: non_blank(req.company),
            period: non_blank(req.period),
            description: non_blank(req.description),
            achievements: req.achievements,
            order: req.order,
        }
    }
}

/// List work experience entries
#[utoipa::path(
    get,
    path = "/api/resume/experiences",
    tag = "resume",
    responses(
        (status = 200, description = "Experience entries by order", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume/experiences")]
pub async fn list_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    section_handlers::list(&data.resume.experiences).await
}

/// Get a work experience entry
#[utoipa::path(
    get,
    path = "/api/resume/experiences/{id}",
    tag = "resume",
    params(("id" = Uuid, Path, description = "Experience ID")),
    responses(
        (status = 200, description = "Experience entry", body = inline(SuccessResponse<Experience>)),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume/experiences/{id}")]
pub async fn get_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::get(&data.resume.experiences, path.into_inner()).await
}

/// Create a work experience entry
#[utoipa::path(
    post,
    path = "/api/resume/experiences",
    tag = "resume",
    security(("BearerAuth" = [])),
    request_body = ExperienceRequest,
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Missing title, company, period or description", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/resume/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<ExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::create(&data.resume.experiences, req.into_inner().into()).await
}

/// Update a work experience entry
#[utoipa::path(
    put,
    path = "/api/resume/experiences/{id}",
    tag = "resume",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Experience ID")),
    request_body = ExperienceRequest,
    responses(
        (status = 200, description = "Experience updated", body = inline(SuccessResponse<Experience>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/resume/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::update(
        &data.resume.experiences,
        path.into_inner(),
        req.into_inner().into(),
    )
    .await
}

/// Delete a work experience entry
#[utoipa::path(
    delete,
    path = "/api/resume/experiences/{id}",
    tag = "resume",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Experience ID")),
    responses(
        (status = 200, description = "Experience deleted", body = inline(SuccessResponse<DeleteConfirmation>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/resume/experiences/{id}")]
pub async fn delete_experience_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::delete(&data.resume.experiences, path.into_inner(), &admin.claims.uid).await
}
