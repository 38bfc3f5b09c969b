use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::SignInWithGoogleUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub sign_in: Arc<dyn SignInWithGoogleUseCase + Send + Sync>,
}
