use actix_multipart::Multipart;
use actix_web::{delete, post, web, HttpResponse, Responder};
use futures::StreamExt;
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::media::application::domain::entities::{FileUpload, UploadedFile};
use crate::modules::media::application::domain::upload_policy::UploadPolicy;
use crate::modules::media::application::ports::incoming::use_cases::UploadError;
use crate::shared::api::{ApiResponse, DeleteConfirmation};
use crate::AppState;

const FILE_FIELD: &str = "file";

enum ReadError {
    Upload(UploadError),
    Malformed(String),
}

impl From<UploadError> for ReadError {
    fn from(e: UploadError) -> Self {
        ReadError::Upload(e)
    }
}

/// Reads the single `file` field, enforcing type and size before anything is stored.
async fn read_single_file(
    mut payload: Multipart,
    policy: &UploadPolicy,
) -> Result<FileUpload, ReadError> {
    let mut upload: Option<FileUpload> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ReadError::Malformed(e.to_string()))?;

        if field.name() != Some(FILE_FIELD) {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| ReadError::Malformed(e.to_string()))?;
            }
            continue;
        }

        if upload.is_some() {
            return Err(UploadError::TooManyFiles.into());
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or(FILE_FIELD)
            .to_string();
        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        if !policy.allows_content_type(&content_type) {
            return Err(UploadError::InvalidFileType(content_type).into());
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ReadError::Malformed(e.to_string()))?;
            if !policy.allows_size((bytes.len() + chunk.len()) as u64) {
                return Err(UploadError::FileTooLarge {
                    limit_bytes: policy.max_file_size_bytes,
                }
                .into());
            }
            bytes.extend_from_slice(&chunk);
        }

        upload = Some(FileUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    upload.ok_or(ReadError::Upload(UploadError::NoFile))
}

fn error_response(err: UploadError, policy: &UploadPolicy) -> HttpResponse {
    match err {
        UploadError::NoFile => ApiResponse::bad_request("NO_FILE", "No file uploaded"),
        UploadError::TooManyFiles => ApiResponse::bad_request(
            "TOO_MANY_FILES",
            "Only one file may be uploaded per request",
        ),
        UploadError::InvalidFileType(ct) => ApiResponse::bad_request(
            "INVALID_FILE_TYPE",
            &format!(
                "File type {} is not allowed. Allowed types: {}",
                ct,
                policy.allowed_types_label()
            ),
        ),
        UploadError::FileTooLarge { limit_bytes } => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            &format!("File exceeds the maximum size of {} bytes", limit_bytes),
        ),
        UploadError::InvalidFileName => {
            ApiResponse::bad_request("INVALID_FILE_NAME", "Invalid file name")
        }
        UploadError::NotFound => ApiResponse::not_found("FILE_NOT_FOUND", "File not found"),
        UploadError::Storage(e) => {
            error!("Object storage error: {}", e);
            ApiResponse::bad_gateway("STORAGE_ERROR", "File storage is unavailable")
        }
    }
}

/// Upload a single file
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    security(("BearerAuth" = [])),
    request_body(content_type = "multipart/form-data", description = "One field named `file`"),
    responses(
        (status = 201, description = "File stored", body = inline(SuccessResponse<UploadedFile>)),
        (status = 400, description = "No file, disallowed type, too large or several files", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 502, description = "Object storage failure", body = ErrorResponse)
    )
)]
#[post("/api/upload")]
pub async fn upload_file_handler(
    _admin: AdminUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let policy = &data.media.policy;

    let upload = match read_single_file(payload, policy).await {
        Ok(upload) => upload,
        Err(ReadError::Upload(e)) => return error_response(e, policy),
        Err(ReadError::Malformed(e)) => {
            warn!("Rejected malformed multipart body: {}", e);
            return ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart body");
        }
    };

    match data.media.upload.execute(upload).await {
        Ok(file) => ApiResponse::created(file),
        Err(e) => error_response(e, policy),
    }
}

/// Delete an uploaded file
#[utoipa::path(
    delete,
    path = "/api/upload/{file_name}",
    tag = "upload",
    security(("BearerAuth" = [])),
    params(("file_name" = String, Path, description = "Object name returned by the upload")),
    responses(
        (status = 200, description = "File deleted", body = inline(SuccessResponse<DeleteConfirmation>)),
        (status = 400, description = "Invalid file name", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 502, description = "Object storage failure", body = ErrorResponse)
    )
)]
#[delete("/api/upload/{file_name}")]
pub async fn delete_file_handler(
    admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let file_name = path.into_inner();

    match data.media.delete.execute(&file_name).await {
        Ok(()) => {
            info!(file = %file_name, by = %admin.claims.uid, "File deleted");
            ApiResponse::success(DeleteConfirmation::new(&file_name, "File"))
        }
        Err(e) => error_response(e, &data.media.policy),
    }
}
