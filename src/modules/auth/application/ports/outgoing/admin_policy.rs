use crate::modules::auth::application::domain::entities::IdentityClaims;

/// Decides whether a verified identity may use admin-only endpoints.
pub trait AdminPolicy: Send + Sync {
    fn is_admin(&self, claims: &IdentityClaims) -> bool;
}
