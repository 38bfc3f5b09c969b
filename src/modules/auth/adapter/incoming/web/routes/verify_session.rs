use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::SessionUser;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifySessionResponse {
    pub user: SessionUser,
}

/// Check the current admin session
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Token belongs to an admin", body = inline(SuccessResponse<VerifySessionResponse>)),
        (status = 401, description = "Token missing, invalid or expired", body = ErrorResponse),
        (status = 403, description = "Identity is not an admin", body = ErrorResponse)
    )
)]
#[get("/api/auth/verify")]
pub async fn verify_session_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(VerifySessionResponse {
        user: SessionUser::from(&admin.claims),
    })
}
