use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::fmt;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::firebase_config::FirebaseConfig;
use super::jwk_source::{HttpJwkSource, JwkSource};
use crate::modules::auth::application::domain::entities::IdentityClaims;
use crate::modules::auth::application::ports::outgoing::{IdentityError, IdentityVerifier};

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
    iat: i64,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified: Option<bool>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

struct CachedKeys {
    keys: JwkSet,
    expires_at: Instant,
}

/// Verifies Firebase ID tokens (RS256) against Google's published key set.
pub struct FirebaseTokenVerifier<S: JwkSource = HttpJwkSource> {
    config: FirebaseConfig,
    source: S,
    cache: RwLock<Option<CachedKeys>>,
}

#[cfg(not(tarpaulin_include))]
impl<S: JwkSource> fmt::Debug for FirebaseTokenVerifier<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseTokenVerifier")
            .field("project_id", &self.config.project_id)
            .finish()
    }
}

impl<S: JwkSource> FirebaseTokenVerifier<S> {
    pub fn new(config: FirebaseConfig, source: S) -> Self {
        Self {
            config,
            source,
            cache: RwLock::new(None),
        }
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, IdentityError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.expires_at > Instant::now() {
                    if let Some(jwk) = cached.keys.find(kid) {
                        return to_decoding_key(jwk);
                    }
                }
            }
        }

        // Stale cache or a key rotated in since the last fetch
        let keys = self.refresh().await?;
        let jwk = keys.find(kid).ok_or_else(|| {
            warn!(kid, "Token signed with an unknown key id");
            IdentityError::Invalid("unknown signing key".to_string())
        })?;

        to_decoding_key(jwk)
    }

    async fn refresh(&self) -> Result<JwkSet, IdentityError> {
        let fetched = self.source.fetch().await?;
        let expires_at = Instant::now() + fetched.max_age.unwrap_or_default();

        let mut cache = self.cache.write().await;
        *cache = Some(CachedKeys {
            keys: fetched.keys.clone(),
            expires_at,
        });

        Ok(fetched.keys)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.config.project_id]);
        validation.set_issuer(&[self.config.issuer()]);
        validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);
        validation.leeway = self.config.leeway_seconds;
        validation.validate_nbf = true;
        validation
    }
}

#[async_trait]
impl<S: JwkSource> IdentityVerifier for FirebaseTokenVerifier<S> {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, IdentityError> {
        let header =
            decode_header(token).map_err(|e| IdentityError::Invalid(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            warn!(alg = ?header.alg, "Token rejected: unexpected algorithm");
            return Err(IdentityError::Invalid("unexpected algorithm".to_string()));
        }

        let kid = header
            .kid
            .ok_or_else(|| IdentityError::Invalid("missing key id".to_string()))?;

        let key = self.decoding_key(&kid).await?;

        let claims = decode::<FirebaseClaims>(token, &key, &self.validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    debug!("Token verification failed: token expired");
                    IdentityError::Expired
                }
                ErrorKind::InvalidSignature => {
                    warn!("Token verification failed: invalid signature");
                    IdentityError::Invalid("invalid signature".to_string())
                }
                other => {
                    debug!(error = ?other, "Token verification failed");
                    IdentityError::Invalid(e.to_string())
                }
            })?
            .claims;

        if claims.sub.trim().is_empty() {
            return Err(IdentityError::Invalid("empty subject".to_string()));
        }

        let latest_iat = Utc::now().timestamp() + self.config.leeway_seconds as i64;
        if claims.iat > latest_iat {
            return Err(IdentityError::Invalid("issued in the future".to_string()));
        }

        Ok(IdentityClaims {
            uid: claims.sub,
            email: claims.email,
            email_verified: claims.email_verified.unwrap_or(false),
            name: claims.name,
            picture: claims.picture,
        })
    }
}

fn to_decoding_key(jwk: &Jwk) -> Result<DecodingKey, IdentityError> {
    DecodingKey::from_jwk(jwk)
        .map_err(|e| IdentityError::KeysUnavailable(format!("unusable key: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::firebase::FetchedKeys;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    const PROJECT: &str = "portfolio-test";
    const KID: &str = "test-key-1";
    const SIGNING_KEY: &[u8] = include_bytes!("testdata/signing_key.pem");
    const FOREIGN_KEY: &[u8] = include_bytes!("testdata/foreign_key.pem");
    const JWKS: &str = include_str!("testdata/jwks.json");

    /* --------------------------------------------------
     * Fake key source
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct StaticJwkSource {
        result: Result<FetchedKeys, IdentityError>,
        fetches: Arc<AtomicUsize>,
    }

    impl StaticJwkSource {
        fn with_max_age(max_age: Option<Duration>) -> Self {
            Self {
                result: Ok(FetchedKeys {
                    keys: serde_json::from_str(JWKS).unwrap(),
                    max_age,
                }),
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(IdentityError::KeysUnavailable("connection refused".into())),
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl JwkSource for StaticJwkSource {
        async fn fetch(&self) -> Result<FetchedKeys, IdentityError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    fn verifier(source: StaticJwkSource) -> FirebaseTokenVerifier<StaticJwkSource> {
        FirebaseTokenVerifier::new(FirebaseConfig::new(PROJECT), source)
    }

    fn claims() -> serde_json::Value {
        let now = Utc::now().timestamp();
        json!({
            "iss": format!("https://securetoken.google.com/{PROJECT}"),
            "aud": PROJECT,
            "sub": "uid-123",
            "iat": now - 10,
            "exp": now + 3600,
            "email": "owner@example.com",
            "email_verified": true,
            "name": "Site Owner",
            "picture": "https://example.com/me.png"
        })
    }

    fn sign_with(key: &[u8], kid: &str, claims: &serde_json::Value) -> String {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_string());
        encode(&header, claims, &EncodingKey::from_rsa_pem(key).unwrap()).unwrap()
    }

    fn sign(claims: &serde_json::Value) -> String {
        sign_with(SIGNING_KEY, KID, claims)
    }

    /* --------------------------------------------------
     * Success
     * -------------------------------------------------- */

    #[tokio::test]
    async fn verifies_valid_token() {
        let identity = verifier(StaticJwkSource::with_max_age(None))
            .verify(&sign(&claims()))
            .await
            .unwrap();

        assert_eq!(identity.uid, "uid-123");
        assert_eq!(identity.email.as_deref(), Some("owner@example.com"));
        assert!(identity.email_verified);
        assert_eq!(identity.name.as_deref(), Some("Site Owner"));
    }

    #[tokio::test]
    async fn reuses_keys_within_max_age() {
        let source = StaticJwkSource::with_max_age(Some(Duration::from_secs(3600)));
        let fetches = source.fetches.clone();
        let v = verifier(source);

        v.verify(&sign(&claims())).await.unwrap();
        v.verify(&sign(&claims())).await.unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refetches_when_keys_are_not_cacheable() {
        let source = StaticJwkSource::with_max_age(None);
        let fetches = source.fetches.clone();
        let v = verifier(source);

        v.verify(&sign(&claims())).await.unwrap();
        v.verify(&sign(&claims())).await.unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    /* --------------------------------------------------
     * Rejections
     * -------------------------------------------------- */

    #[tokio::test]
    async fn unknown_kid_refetches_then_rejects() {
        let source = StaticJwkSource::with_max_age(Some(Duration::from_secs(3600)));
        let fetches = source.fetches.clone();
        let v = verifier(source);

        v.verify(&sign(&claims())).await.unwrap();
        let err = v
            .verify(&sign_with(SIGNING_KEY, "rotated-key", &claims()))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::Invalid(_)));
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let mut c = claims();
        let now = Utc::now().timestamp();
        c["iat"] = json!(now - 7200);
        c["exp"] = json!(now - 3600);

        let err = verifier(StaticJwkSource::with_max_age(None))
            .verify(&sign(&c))
            .await
            .unwrap_err();

        assert_eq!(err, IdentityError::Expired);
    }

    #[tokio::test]
    async fn wrong_audience_is_rejected() {
        let mut c = claims();
        c["aud"] = json!("someone-else");

        let err = verifier(StaticJwkSource::with_max_age(None))
            .verify(&sign(&c))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::Invalid(_)));
    }

    #[tokio::test]
    async fn wrong_issuer_is_rejected() {
        let mut c = claims();
        c["iss"] = json!("https://accounts.example.com");

        let err = verifier(StaticJwkSource::with_max_age(None))
            .verify(&sign(&c))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::Invalid(_)));
    }

    #[tokio::test]
    async fn signature_from_another_key_is_rejected() {
        let err = verifier(StaticJwkSource::with_max_age(None))
            .verify(&sign_with(FOREIGN_KEY, KID, &claims()))
            .await
            .unwrap_err();

        assert_eq!(err, IdentityError::Invalid("invalid signature".to_string()));
    }

    #[tokio::test]
    async fn symmetric_algorithm_is_rejected() {
        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(KID.to_string());
        let token = encode(&header, &claims(), &EncodingKey::from_secret(b"secret")).unwrap();

        let err = verifier(StaticJwkSource::with_max_age(None))
            .verify(&token)
            .await
            .unwrap_err();

        assert_eq!(err, IdentityError::Invalid("unexpected algorithm".to_string()));
    }

    #[tokio::test]
    async fn unsigned_token_is_rejected() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine;

        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims().to_string());
        let token = format!("{header}.{payload}.");

        let err = verifier(StaticJwkSource::with_max_age(None))
            .verify(&token)
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::Invalid(_)));
    }

    #[tokio::test]
    async fn empty_subject_is_rejected() {
        let mut c = claims();
        c["sub"] = json!("");

        let err = verifier(StaticJwkSource::with_max_age(None))
            .verify(&sign(&c))
            .await
            .unwrap_err();

        assert_eq!(err, IdentityError::Invalid("empty subject".to_string()));
    }

    #[tokio::test]
    async fn token_issued_in_the_future_is_rejected() {
        let mut c = claims();
        c["iat"] = json!(Utc::now().timestamp() + 600);

        let err = verifier(StaticJwkSource::with_max_age(None))
            .verify(&sign(&c))
            .await
            .unwrap_err();

        assert_eq!(err, IdentityError::Invalid("issued in the future".to_string()));
    }

    #[tokio::test]
    async fn missing_email_verified_defaults_to_false() {
        let mut c = claims();
        c.as_object_mut().unwrap().remove("email_verified");

        let identity = verifier(StaticJwkSource::with_max_age(None))
            .verify(&sign(&c))
            .await
            .unwrap();

        assert!(!identity.email_verified);
    }

    #[tokio::test]
    async fn key_outage_surfaces_as_unavailable() {
        let err = verifier(StaticJwkSource::failing())
            .verify(&sign(&claims()))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::KeysUnavailable(_)));
    }

    #[tokio::test]
    async fn garbage_is_rejected_without_fetching_keys() {
        let source = StaticJwkSource::with_max_age(None);
        let fetches = source.fetches.clone();

        let err = verifier(source).verify("not-a-jwt").await.unwrap_err();

        assert!(matches!(err, IdentityError::Invalid(_)));
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
    }
}
