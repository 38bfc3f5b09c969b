use crate::modules::auth::application::domain::entities::IdentityClaims;
use crate::modules::auth::application::ports::outgoing::AdminPolicy;

/// Admins are the verified identities whose email is on a configured list.
#[derive(Debug, Clone)]
pub struct AllowedEmailsPolicy {
    allowed: Vec<String>,
}

impl AllowedEmailsPolicy {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: emails
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }
}

impl AdminPolicy for AllowedEmailsPolicy {
    fn is_admin(&self, claims: &IdentityClaims) -> bool {
        if !claims.email_verified {
            return false;
        }

        match &claims.email {
            Some(email) => {
                let email = email.trim().to_lowercase();
                self.allowed.iter().any(|allowed| *allowed == email)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(email: Option<&str>, verified: bool) -> IdentityClaims {
        IdentityClaims {
            uid: "uid-1".to_string(),
            email: email.map(str::to_string),
            email_verified: verified,
            name: None,
            picture: None,
        }
    }

    #[test]
    fn accepts_listed_email_case_insensitively() {
        let policy = AllowedEmailsPolicy::new(["Owner@Example.com"]);
        assert!(policy.is_admin(&claims(Some("owner@example.COM"), true)));
    }

    #[test]
    fn rejects_unlisted_email() {
        let policy = AllowedEmailsPolicy::new(["owner@example.com"]);
        assert!(!policy.is_admin(&claims(Some("visitor@example.com"), true)));
    }

    #[test]
    fn rejects_unverified_email() {
        let policy = AllowedEmailsPolicy::new(["owner@example.com"]);
        assert!(!policy.is_admin(&claims(Some("owner@example.com"), false)));
    }

    #[test]
    fn rejects_identity_without_email() {
        let policy = AllowedEmailsPolicy::new(["owner@example.com"]);
        assert!(!policy.is_admin(&claims(None, true)));
    }

    #[test]
    fn empty_list_admits_nobody() {
        let policy = AllowedEmailsPolicy::new(Vec::<String>::new());
        assert!(!policy.is_admin(&claims(Some(""), true)));
    }
}
