use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::SessionUser;

#[derive(Debug, Clone)]
pub struct SignInResult {
    /// The verified identity token, reused by the client as its bearer credential.
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInError {
    MissingToken,
    InvalidToken(String),
    AccessDenied,
    ProviderUnavailable(String),
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInError::MissingToken => write!(f, "Token is required"),
            SignInError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
            SignInError::AccessDenied => write!(f, "Access denied"),
            SignInError::ProviderUnavailable(msg) => {
                write!(f, "Identity provider unavailable: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait SignInWithGoogleUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<SignInResult, SignInError>;
}
