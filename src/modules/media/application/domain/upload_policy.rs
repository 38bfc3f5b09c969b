#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
    pub bucket_name: String,
}

impl UploadPolicy {
    pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const MAX_FILE_NAME_LEN: usize = 255;
    pub const ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "application/pdf",
    ];

    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            max_file_size_bytes: Self::MAX_FILE_SIZE_BYTES,
            max_file_name_len: Self::MAX_FILE_NAME_LEN,
            allowed_mime_types: Self::ALLOWED_MIME_TYPES,
            bucket_name: bucket_name.into(),
        }
    }

    pub fn allows_content_type(&self, content_type: &str) -> bool {
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type.trim()))
    }

    pub fn allows_size(&self, size: u64) -> bool {
        size <= self.max_file_size_bytes
    }

    pub fn allowed_types_label(&self) -> String {
        self.allowed_mime_types.join(", ")
    }
}
