use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::section_handlers;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::resume::application::domain::entities::Education;
use crate::modules::resume::application::domain::inputs::{EducationChanges, EducationDraft};
use crate::shared::api::DeleteConfirmation;
use crate::shared::validation::non_blank;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequest {
    #[schema(example = "BSc Computer Science")]
    pub degree: Option<String>,
    pub school: Option<String>,
    pub period: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl From<EducationRequest> for EducationDraft {
    fn from(req: EducationRequest) -> Self {
        EducationDraft {
            degree: req.degree,
            school: req.school,
            period: req.period,
            achievements: req.achievements,
            order: req.order,
        }
    }
}

impl From<EducationRequest> for EducationChanges {
    fn from(req: EducationRequest) -> Self {
        EducationChanges {
            degree: non_blank(req.degree),
            school: non_blank(req.school),
            period: non_blank(req.period),
            achievements: req.achievements,
            order: req.order,
        }
    }
}

/// List education entries
#[utoipa::path(
    get,
    path = "/api/resume/education",
    tag = "resume",
    responses(
        (status = 200, description = "Education entries by order", body = inline(SuccessResponse<Vec<Education>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume/education")]
pub async fn list_education_handler(data: web::Data<AppState>) -> impl Responder {
    section_handlers::list(&data.resume.education).await
}

/// Get an education entry
#[utoipa::path(
    get,
    path = "/api/resume/education/{id}",
    tag = "resume",
    params(("id" = Uuid, Path, description = "Education ID")),
    responses(
        (status = 200, description = "Education entry", body = inline(SuccessResponse<Education>)),
        (status = 404, description = "Education not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume/education/{id}")]
pub async fn get_education_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::get(&data.resume.education, path.into_inner()).await
}

/// Create an education entry
#[utoipa::path(
    post,
    path = "/api/resume/education",
    tag = "resume",
    security(("BearerAuth" = [])),
    request_body = EducationRequest,
    responses(
        (status = 201, description = "Education created", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Missing degree, school or period", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/resume/education")]
pub async fn create_education_handler(
    _admin: AdminUser,
    req: web::Json<EducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::create(&data.resume.education, req.into_inner().into()).await
}

/// Update an education entry
#[utoipa::path(
    put,
    path = "/api/resume/education/{id}",
    tag = "resume",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Education ID")),
    request_body = EducationRequest,
    responses(
        (status = 200, description = "Education updated", body = inline(SuccessResponse<Education>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Education not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/resume/education/{id}")]
pub async fn update_education_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<EducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::update(
        &data.resume.education,
        path.into_inner(),
        req.into_inner().into(),
    )
    .await
}

/// Delete an education entry
#[utoipa::path(
    delete,
    path = "/api/resume/education/{id}",
    tag = "resume",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Education ID")),
    responses(
        (status = 200, description = "Education deleted", body = inline(SuccessResponse<DeleteConfirmation>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Education not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/resume/education/{id}")]
pub async fn delete_education_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::delete(&data.resume.education, path.into_inner(), &admin.claims.uid).await
}
