use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    #[schema(example = "Senior Mobile Developer")]
    pub title: String,
    pub company: String,
    #[schema(example = "2021 - Present")]
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    /// Ascending sort key
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    pub school: String,
    pub period: String,
    pub achievements: Vec<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: Uuid,
    #[schema(example = "Mobile")]
    pub category: String,
    #[schema(example = json!(["Flutter", "Kotlin"]))]
    pub items: Vec<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    /// Free-form issue date as entered by the admin
    pub date: String,
    /// Empty when no certificate file was uploaded
    pub pdf_url: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
