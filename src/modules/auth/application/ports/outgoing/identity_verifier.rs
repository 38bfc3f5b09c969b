use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::IdentityClaims;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),

    /// Verification keys could not be obtained; not the caller's fault.
    #[error("Verification keys unavailable: {0}")]
    KeysUnavailable(String),
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, IdentityError>;
}
