use serde::Serialize;
use utoipa::ToSchema;

/// Claims of an identity token that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub uid: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Public view of the signed-in admin.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct SessionUser {
    #[schema(example = "x8Jd0YbQ2kTq")]
    pub uid: String,
    #[schema(example = "owner@example.com")]
    pub email: Option<String>,
    #[schema(example = "Site Owner")]
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl From<&IdentityClaims> for SessionUser {
    fn from(claims: &IdentityClaims) -> Self {
        Self {
            uid: claims.uid.clone(),
            email: claims.email.clone(),
            name: claims.name.clone(),
            picture: claims.picture.clone(),
        }
    }
}
