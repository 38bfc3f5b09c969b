use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProjectsQuery {
    /// Only return projects of this category
    pub category: Option<ProjectCategory>,
}

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 400, description = "Unknown category", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ProjectListFilter {
        category: query.into_inner().category,
    };

    match data.project.get_list.execute(filter).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(GetProjectsError::QueryError(e)) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
