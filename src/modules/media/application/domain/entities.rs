use serde::Serialize;
use utoipa::ToSchema;

/// A file read from the request, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Object name inside the bucket, used for deletion.
    #[schema(example = "1717171717171-cover.png")]
    pub file_name: String,
    #[schema(example = "https://storage.googleapis.com/portfolio-bucket/1717171717171-cover.png")]
    pub url: String,
    pub content_type: String,
    pub size: u64,
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_` and collapses
/// runs of dots, so the result always passes [`is_valid_object_name`].
pub fn sanitize_file_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for c in name.trim().chars() {
        let c = if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            c
        } else {
            '_'
        };
        if c == '.' && cleaned.ends_with('.') {
            continue;
        }
        cleaned.push(c);
    }

    if cleaned.trim_matches(|c| c == '.' || c == '_').is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

pub fn object_name(timestamp_millis: i64, original_name: &str) -> String {
    format!("{}-{}", timestamp_millis, sanitize_file_name(original_name))
}

pub fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{bucket}/{object_name}")
}

/// Names accepted for deletion: one path segment, no traversal.
pub fn is_valid_object_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}
