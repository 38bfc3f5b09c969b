//! Shared request handling for the four resume sections.

use actix_web::HttpResponse;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::resume::application::domain::section::ResumeSection;
use crate::modules::resume::application::ports::incoming::use_cases::ResumeError;
use crate::modules::resume::application::resume_use_cases::SectionUseCases;
use crate::shared::api::{ApiResponse, DeleteConfirmation};

fn error_response<S: ResumeSection>(err: ResumeError, action: &str) -> HttpResponse {
    match err {
        ResumeError::Validation(e) => ApiResponse::validation_error(&e.to_string()),
        ResumeError::NotFound => {
            ApiResponse::not_found(S::NOT_FOUND_CODE, &format!("{} not found", S::LABEL))
        }
        ResumeError::Repository(e) => {
            error!("Failed to {} {}: {}", action, S::LABEL.to_lowercase(), e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn list<S: ResumeSection>(uc: &SectionUseCases<S>) -> HttpResponse {
    match uc.list.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(e) => error_response::<S>(e, "list"),
    }
}

pub(super) async fn get<S: ResumeSection>(uc: &SectionUseCases<S>, id: Uuid) -> HttpResponse {
    match uc.get.execute(id).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(e) => error_response::<S>(e, "fetch"),
    }
}

pub(super) async fn create<S: ResumeSection>(
    uc: &SectionUseCases<S>,
    draft: S::Draft,
) -> HttpResponse {
    match uc.create.execute(draft).await {
        Ok(entry) => ApiResponse::created(entry),
        Err(e) => error_response::<S>(e, "create"),
    }
}

pub(super) async fn update<S: ResumeSection>(
    uc: &SectionUseCases<S>,
    id: Uuid,
    changes: S::Changes,
) -> HttpResponse {
    match uc.update.execute(id, changes).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(e) => error_response::<S>(e, "update"),
    }
}

pub(super) async fn delete<S: ResumeSection>(
    uc: &SectionUseCases<S>,
    id: Uuid,
    admin_uid: &str,
) -> HttpResponse {
    match uc.delete.execute(id).await {
        Ok(()) => {
            info!("{} {} deleted by {}", S::LABEL, id, admin_uid);
            ApiResponse::success(DeleteConfirmation::new(id, S::LABEL))
        }
        Err(e) => error_response::<S>(e, "delete"),
    }
}
