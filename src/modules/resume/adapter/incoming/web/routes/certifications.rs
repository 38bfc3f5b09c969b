use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::section_handlers;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::resume::application::domain::entities::Certification;
use crate::modules::resume::application::domain::inputs::{
    CertificationChanges, CertificationDraft,
};
use crate::shared::api::DeleteConfirmation;
use crate::shared::validation::non_blank;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRequest {
    #[schema(example = "AWS Certified Developer")]
    pub name: Option<String>,
    pub issuer: Option<String>,
    #[schema(example = "2023-05")]
    pub date: Option<String>,
    /// URL returned by the upload endpoint; an empty string detaches it.
    pub pdf_url: Option<String>,
    pub order: Option<i32>,
}

impl From<CertificationRequest> for CertificationDraft {
    fn from(req: CertificationRequest) -> Self {
        CertificationDraft {
            name: req.name,
            issuer: req.issuer,
            date: req.date,
            pdf_url: req.pdf_url,
            order: req.order,
        }
    }
}

impl From<CertificationRequest> for CertificationChanges {
    fn from(req: CertificationRequest) -> Self {
        CertificationChanges {
            name: non_blank(req.name),
            issuer: req.issuer,
            date: req.date,
            pdf_url: req.pdf_url,
            order: req.order,
        }
    }
}

/// List certifications
#[utoipa::path(
    get,
    path = "/api/resume/certifications",
    tag = "resume",
    responses(
        (status = 200, description = "Certifications by order", body = inline(SuccessResponse<Vec<Certification>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume/certifications")]
pub async fn list_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    section_handlers::list(&data.resume.certifications).await
}

/// Get a certification
#[utoipa::path(
    get,
    path = "/api/resume/certifications/{id}",
    tag = "resume",
    params(("id" = Uuid, Path, description = "Certification ID")),
    responses(
        (status = 200, description = "Certification", body = inline(SuccessResponse<Certification>)),
        (status = 404, description = "Certification not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume/certifications/{id}")]
pub async fn get_certification_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::get(&data.resume.certifications, path.into_inner()).await
}

/// Create a certification
#[utoipa::path(
    post,
    path = "/api/resume/certifications",
    tag = "resume",
    security(("BearerAuth" = [])),
    request_body = CertificationRequest,
    responses(
        (status = 201, description = "Certification created", body = inline(SuccessResponse<Certification>)),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/resume/certifications")]
pub async fn create_certification_handler(
    _admin: AdminUser,
    req: web::Json<CertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::create(&data.resume.certifications, req.into_inner().into()).await
}

/// Update a certification
#[utoipa::path(
    put,
    path = "/api/resume/certifications/{id}",
    tag = "resume",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Certification ID")),
    request_body = CertificationRequest,
    responses(
        (status = 200, description = "Certification updated", body = inline(SuccessResponse<Certification>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Certification not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/resume/certifications/{id}")]
pub async fn update_certification_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<CertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::update(
        &data.resume.certifications,
        path.into_inner(),
        req.into_inner().into(),
    )
    .await
}

/// Delete a certification
#[utoipa::path(
    delete,
    path = "/api/resume/certifications/{id}",
    tag = "resume",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Certification ID")),
    responses(
        (status = 200, description = "Certification deleted", body = inline(SuccessResponse<DeleteConfirmation>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Certification not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/resume/certifications/{id}")]
pub async fn delete_certification_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::delete(
        &data.resume.certifications,
        path.into_inner(),
        &admin.claims.uid,
    )
    .await
}
