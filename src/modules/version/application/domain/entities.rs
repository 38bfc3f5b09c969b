use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use utoipa::ToSchema;

/// Key of the single version row.
pub const VERSION_RECORD_ID: &str = "current";

pub const INITIAL_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    #[schema(example = "1.4.2")]
    pub version: String,
    pub last_updated: DateTime<Utc>,
}

fn semver_regex() -> Option<&'static Regex> {
    static SEMVER: OnceLock<Option<Regex>> = OnceLock::new();
    SEMVER.get_or_init(|| {
        Regex::new(
            r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
        )
        .ok()
    })
    .as_ref()
}

/// `MAJOR.MINOR.PATCH[-pre][+build]`
pub fn is_semver(value: &str) -> bool {
    semver_regex().is_some_and(|re| re.is_match(value))
}
