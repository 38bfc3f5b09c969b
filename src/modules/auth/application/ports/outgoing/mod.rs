pub mod admin_policy;
pub mod identity_verifier;

pub use admin_policy::AdminPolicy;
pub use identity_verifier::{IdentityError, IdentityVerifier};
