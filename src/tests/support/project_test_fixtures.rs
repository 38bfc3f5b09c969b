use chrono::Utc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectCategory};

pub fn sample_project(id: Uuid) -> Project {
    let now = Utc::now();
    Project {
        id,
        title: "Expense Tracker".to_string(),
        description: "Flutter app for tracking spending".to_string(),
        image: Some("https://storage.googleapis.com/bucket/cover.png".to_string()),
        technologies: vec!["Flutter".to_string(), "Firebase".to_string()],
        github_url: Some("https://github.com/owner/expense".to_string()),
        live_url: None,
        category: ProjectCategory::Personal,
        created_at: now,
        updated_at: now,
    }
}
