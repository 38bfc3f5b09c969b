use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Key of the single contact-details row.
pub const CONTACT_DETAILS_ID: &str = "details";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[schema(example = "owner@example.com")]
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Network name to profile URL, e.g. `github`.
    #[schema(example = json!({"github": "https://github.com/owner"}))]
    pub social_links: BTreeMap<String, String>,
    pub updated_at: DateTime<Utc>,
}

/// A visitor's message from the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn mail_subject(&self) -> String {
        match self.subject.as_deref() {
            Some(subject) => format!("[Portfolio] {subject}"),
            None => format!("[Portfolio] New message from {}", self.name),
        }
    }

    pub fn mail_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }
}
