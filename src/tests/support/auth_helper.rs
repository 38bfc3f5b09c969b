use actix_web::web;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::auth::adapter::incoming::web::extractors::AuthGate;
use crate::modules::auth::application::domain::entities::IdentityClaims;
use crate::modules::auth::application::ports::outgoing::{IdentityError, IdentityVerifier};
use crate::modules::auth::application::service::AllowedEmailsPolicy;

pub const ADMIN_EMAIL: &str = "owner@example.com";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const VISITOR_TOKEN: &str = "visitor-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub fn admin_claims() -> IdentityClaims {
    IdentityClaims {
        uid: "admin-uid".to_string(),
        email: Some(ADMIN_EMAIL.to_string()),
        email_verified: true,
        name: Some("Site Owner".to_string()),
        picture: None,
    }
}

pub fn visitor_claims() -> IdentityClaims {
    IdentityClaims {
        uid: "visitor-uid".to_string(),
        email: Some("visitor@example.com".to_string()),
        email_verified: true,
        name: Some("Visitor".to_string()),
        picture: None,
    }
}

/// Identity verifier keyed by the literal token string; unknown tokens are invalid.
#[derive(Clone)]
pub struct StubIdentityVerifier {
    identities: HashMap<String, Result<IdentityClaims, IdentityError>>,
}

impl Default for StubIdentityVerifier {
    fn default() -> Self {
        Self {
            identities: HashMap::new(),
        }
        .with(ADMIN_TOKEN, Ok(admin_claims()))
        .with(VISITOR_TOKEN, Ok(visitor_claims()))
        .with(EXPIRED_TOKEN, Err(IdentityError::Expired))
    }
}

impl StubIdentityVerifier {
    pub fn with(mut self, token: &str, result: Result<IdentityClaims, IdentityError>) -> Self {
        self.identities.insert(token.to_string(), result);
        self
    }
}

#[async_trait]
impl IdentityVerifier for StubIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, IdentityError> {
        self.identities
            .get(token)
            .cloned()
            .unwrap_or_else(|| Err(IdentityError::Invalid("unknown test token".to_string())))
    }
}

pub fn auth_gate() -> web::Data<AuthGate> {
    web::Data::new(AuthGate::new(
        Arc::new(StubIdentityVerifier::default()),
        Arc::new(AllowedEmailsPolicy::new([ADMIN_EMAIL])),
    ))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
