use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::SessionUser;
use crate::modules::auth::application::ports::incoming::use_cases::SignInError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct GoogleSignInRequest {
    /// Identity token obtained from the Google sign-in popup
    #[schema(example = "eyJhbGciOiJSUzI1NiIsImtpZCI6...")]
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GoogleSignInResponse {
    /// Same token, to be sent back as `Authorization: Bearer <token>`
    pub token: String,
    pub user: SessionUser,
}

/// Sign in with Google
///
/// Verifies the identity token and admits it only if it belongs to an admin.
#[utoipa::path(
    post,
    path = "/api/auth/google",
    tag = "auth",
    request_body = GoogleSignInRequest,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<GoogleSignInResponse>)),
        (status = 400, description = "Token missing", body = ErrorResponse),
        (status = 401, description = "Token invalid or expired", body = ErrorResponse),
        (status = 403, description = "Identity is not an admin", body = ErrorResponse),
        (status = 500, description = "Identity provider unavailable", body = ErrorResponse)
    )
)]
#[post("/api/auth/google")]
pub async fn google_sign_in_handler(
    req: web::Json<GoogleSignInRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = req.into_inner().token.unwrap_or_default();

    match data.auth.sign_in.execute(&token).await {
        Ok(result) => ApiResponse::success(GoogleSignInResponse {
            token: result.token,
            user: result.user,
        }),

        Err(SignInError::MissingToken) => {
            ApiResponse::bad_request("TOKEN_REQUIRED", "Token is required")
        }

        Err(SignInError::InvalidToken(_)) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(SignInError::AccessDenied) => ApiResponse::forbidden(
            "ACCESS_DENIED",
            "Access denied. Only the site owner can sign in.",
        ),

        Err(SignInError::ProviderUnavailable(e)) => {
            error!("Identity provider unavailable during sign-in: {}", e);
            ApiResponse::internal_error()
        }
    }
}
