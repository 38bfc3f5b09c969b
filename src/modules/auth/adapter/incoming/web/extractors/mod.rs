pub mod auth;

pub use auth::{AdminUser, AuthGate, AuthenticatedIdentity};
