use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    Personal,
    Client,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Personal => "personal",
            ProjectCategory::Client => "client",
        }
    }

    /// Unknown stored values fall back to the default category.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "client" => ProjectCategory::Client,
            _ => ProjectCategory::Personal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    #[schema(example = "Expense Tracker")]
    pub title: String,
    pub description: String,
    /// Public URL of the cover image
    pub image: Option<String>,
    #[schema(example = json!(["Flutter", "Firebase"]))]
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub category: ProjectCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
