use actix_web::{get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::ContactDetails;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, ContactMessageDraft,
};
use crate::modules::contact::application::ports::outgoing::contact_repository::ContactDetailsChanges;
use crate::shared::api::ApiResponse;
use crate::shared::validation::non_blank;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailsRequest {
    #[schema(example = "owner@example.com")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Merged into the stored links; keys not sent are kept.
    pub social_links: Option<BTreeMap<String, String>>,
}

impl From<ContactDetailsRequest> for ContactDetailsChanges {
    fn from(req: ContactDetailsRequest) -> Self {
        ContactDetailsChanges {
            email: non_blank(req.email),
            phone: req.phone,
            location: req.location,
            social_links: req.social_links,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ContactMessageRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.org")]
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl From<ContactMessageRequest> for ContactMessageDraft {
    fn from(req: ContactMessageRequest) -> Self {
        ContactMessageDraft {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageReceipt {
    #[schema(example = "Message sent successfully")]
    pub message: String,
}

fn error_response(err: ContactError, action: &str) -> HttpResponse {
    match err {
        ContactError::Validation(e) => ApiResponse::validation_error(&e.to_string()),
        ContactError::Delivery(e) => {
            error!("Failed to {}: {}", action, e);
            ApiResponse::bad_gateway("EMAIL_DELIVERY_FAILED", "Message could not be delivered")
        }
        ContactError::Repository(e) => {
            error!("Failed to {}: {}", action, e);
            ApiResponse::internal_error()
        }
    }
}

/// Public contact details, created with defaults on first read
#[utoipa::path(
    get,
    path = "/api/contact-details",
    tag = "contact",
    responses(
        (status = 200, description = "Contact details", body = inline(SuccessResponse<ContactDetails>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/contact-details")]
pub async fn get_contact_details_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.get_details.execute().await {
        Ok(details) => ApiResponse::success(details),
        Err(e) => error_response(e, "fetch contact details"),
    }
}

/// Update contact details
#[utoipa::path(
    put,
    path = "/api/contact-details",
    tag = "contact",
    security(("BearerAuth" = [])),
    request_body = ContactDetailsRequest,
    responses(
        (status = 200, description = "Merged contact details", body = inline(SuccessResponse<ContactDetails>)),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/contact-details")]
pub async fn update_contact_details_handler(
    _admin: AdminUser,
    req: web::Json<ContactDetailsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact
        .update_details
        .execute(req.into_inner().into())
        .await
    {
        Ok(details) => ApiResponse::success(details),
        Err(e) => error_response(e, "update contact details"),
    }
}

/// Send a message to the site owner
#[utoipa::path(
    post,
    path = "/api/contact/messages",
    tag = "contact",
    request_body = ContactMessageRequest,
    responses(
        (status = 200, description = "Message forwarded", body = inline(SuccessResponse<MessageReceipt>)),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 502, description = "Mail relay failed", body = ErrorResponse)
    )
)]
#[post("/api/contact/messages")]
pub async fn send_contact_message_handler(
    req: web::Json<ContactMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.send_message.execute(req.into_inner().into()).await {
        Ok(()) => ApiResponse::success(MessageReceipt {
            message: "Message sent successfully".to_string(),
        }),
        Err(e) => error_response(e, "send contact message"),
    }
}
