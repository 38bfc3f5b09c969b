use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::auth::application::domain::entities::SessionUser;
use crate::modules::auth::application::ports::incoming::use_cases::{
    SignInError, SignInResult, SignInWithGoogleUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    AdminPolicy, IdentityError, IdentityVerifier,
};

pub struct SignInWithGoogleService {
    verifier: Arc<dyn IdentityVerifier + Send + Sync>,
    policy: Arc<dyn AdminPolicy + Send + Sync>,
}

impl SignInWithGoogleService {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier + Send + Sync>,
        policy: Arc<dyn AdminPolicy + Send + Sync>,
    ) -> Self {
        Self { verifier, policy }
    }
}

#[async_trait]
impl SignInWithGoogleUseCase for SignInWithGoogleService {
    async fn execute(&self, token: &str) -> Result<SignInResult, SignInError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SignInError::MissingToken);
        }

        let claims = self.verifier.verify(token).await.map_err(|e| match e {
            IdentityError::KeysUnavailable(msg) => SignInError::ProviderUnavailable(msg),
            other => SignInError::InvalidToken(other.to_string()),
        })?;

        if !self.policy.is_admin(&claims) {
            warn!(uid = %claims.uid, "Sign-in rejected: identity is not an admin");
            return Err(SignInError::AccessDenied);
        }

        info!(uid = %claims.uid, "Admin signed in");

        Ok(SignInResult {
            token: token.to_string(),
            user: SessionUser::from(&claims),
        })
    }
}
