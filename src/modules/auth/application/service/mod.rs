pub mod allowed_emails_policy;
pub mod sign_in_with_google_service;

pub use allowed_emails_policy::AllowedEmailsPolicy;
pub use sign_in_with_google_service::SignInWithGoogleService;
