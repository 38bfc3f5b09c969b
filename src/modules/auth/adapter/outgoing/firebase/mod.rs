mod firebase_config;
mod jwk_source;
mod token_verifier;

pub use firebase_config::FirebaseConfig;
pub use jwk_source::{FetchedKeys, HttpJwkSource, JwkSource};
pub use token_verifier::FirebaseTokenVerifier;
