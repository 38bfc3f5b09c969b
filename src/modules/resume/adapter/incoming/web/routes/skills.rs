use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::section_handlers;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::resume::application::domain::entities::SkillCategory;
use crate::modules::resume::application::domain::inputs::{
    SkillCategoryChanges, SkillCategoryDraft,
};
use crate::shared::api::DeleteConfirmation;
use crate::shared::validation::non_blank;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryRequest {
    #[schema(example = "Mobile")]
    pub category: Option<String>,
    #[schema(example = json!(["Flutter", "Kotlin"]))]
    pub items: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl From<SkillCategoryRequest> for SkillCategoryDraft {
    fn from(req: SkillCategoryRequest) -> Self {
        SkillCategoryDraft {
            category: req.category,
            items: req.items,
            order: req.order,
        }
    }
}

impl From<SkillCategoryRequest> for SkillCategoryChanges {
    fn from(req: SkillCategoryRequest) -> Self {
        SkillCategoryChanges {
            category: non_blank(req.category),
            items: req.items,
            order: req.order,
        }
    }
}

/// List skill categories
#[utoipa::path(
    get,
    path = "/api/resume/skills",
    tag = "resume",
    responses(
        (status = 200, description = "Skill categories by order", body = inline(SuccessResponse<Vec<SkillCategory>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume/skills")]
pub async fn list_skills_handler(data: web::Data<AppState>) -> impl Responder {
    section_handlers::list(&data.resume.skills).await
}

/// Get a skill category
#[utoipa::path(
    get,
    path = "/api/resume/skills/{id}",
    tag = "resume",
    params(("id" = Uuid, Path, description = "Skill category ID")),
    responses(
        (status = 200, description = "Skill category", body = inline(SuccessResponse<SkillCategory>)),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/resume/skills/{id}")]
pub async fn get_skill_category_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::get(&data.resume.skills, path.into_inner()).await
}

/// Create a skill category
#[utoipa::path(
    post,
    path = "/api/resume/skills",
    tag = "resume",
    security(("BearerAuth" = [])),
    request_body = SkillCategoryRequest,
    responses(
        (status = 201, description = "Skill category created", body = inline(SuccessResponse<SkillCategory>)),
        (status = 400, description = "Missing category or items", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/resume/skills")]
pub async fn create_skill_category_handler(
    _admin: AdminUser,
    req: web::Json<SkillCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::create(&data.resume.skills, req.into_inner().into()).await
}

/// Update a skill category
#[utoipa::path(
    put,
    path = "/api/resume/skills/{id}",
    tag = "resume",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Skill category ID")),
    request_body = SkillCategoryRequest,
    responses(
        (status = 200, description = "Skill category updated", body = inline(SuccessResponse<SkillCategory>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/resume/skills/{id}")]
pub async fn update_skill_category_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SkillCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::update(&data.resume.skills, path.into_inner(), req.into_inner().into())
        .await
}

/// Delete a skill category
#[utoipa::path(
    delete,
    path = "/api/resume/skills/{id}",
    tag = "resume",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Skill category ID")),
    responses(
        (status = 200, description = "Skill category deleted", body = inline(SuccessResponse<DeleteConfirmation>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/resume/skills/{id}")]
pub async fn delete_skill_category_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    section_handlers::delete(&data.resume.skills, path.into_inner(), &admin.claims.uid).await
}
