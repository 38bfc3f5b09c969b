use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::modules::auth::application::domain::entities::IdentityClaims;
use crate::modules::auth::application::ports::outgoing::{
    AdminPolicy, IdentityError, IdentityVerifier,
};
use crate::shared::api::ApiResponse;

/// Verifier and admin predicate shared by the auth extractors.
#[derive(Clone)]
pub struct AuthGate {
    pub verifier: Arc<dyn IdentityVerifier + Send + Sync>,
    pub policy: Arc<dyn AdminPolicy + Send + Sync>,
}

impl AuthGate {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier + Send + Sync>,
        policy: Arc<dyn AdminPolicy + Send + Sync>,
    ) -> Self {
        Self { verifier, policy }
    }
}

/// Any caller holding a valid identity token
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    pub claims: IdentityClaims,
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedIdentity {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let gate = req.app_data::<web::Data<AuthGate>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let gate = match gate {
                Some(gate) => gate,
                None => {
                    error!("AuthGate is not registered as app data");
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };

            let token = match token {
                Some(t) => t,
                None => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "MISSING_AUTH_HEADER",
                        "Missing or invalid authorization header",
                    )));
                }
            };

            match gate.verifier.verify(&token).await {
                Ok(claims) => Ok(AuthenticatedIdentity { claims, token }),
                Err(IdentityError::KeysUnavailable(msg)) => {
                    error!("Identity keys unavailable: {}", msg);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
                Err(e) => {
                    debug!("Bearer token rejected: {}", e);
                    Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN",
                        "Invalid or expired token",
                    )))
                }
            }
        })
    }
}

/// A verified identity that the admin policy accepts
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub claims: IdentityClaims,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let gate = req.app_data::<web::Data<AuthGate>>().cloned();
        let identity = AuthenticatedIdentity::from_request(req, payload);

        Box::pin(async move {
            let identity = identity.await?;

            // Presence was already checked by AuthenticatedIdentity
            let allowed = gate
                .map(|g| g.policy.is_admin(&identity.claims))
                .unwrap_or(false);

            if !allowed {
                warn!(uid = %identity.claims.uid, "Admin access denied");
                return Err(create_api_error(ApiResponse::forbidden(
                    "ACCESS_DENIED",
                    "Admin access required",
                )));
            }

            Ok(AdminUser {
                claims: identity.claims,
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
