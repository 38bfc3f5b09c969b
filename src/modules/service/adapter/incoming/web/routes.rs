use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::incoming::use_cases::{
    ServiceDraft, ServiceError,
};
use crate::modules::service::application::ports::outgoing::service_repository::ServiceChanges;
use crate::shared::api::{ApiResponse, DeleteConfirmation};
use crate::shared::validation::non_blank;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    #[serde(alias = "service")]
    #[schema(example = "API Development")]
    pub name: Option<String>,
    #[serde(rename = "priceUSD")]
    #[schema(example = 500.0)]
    pub price_usd: Option<f64>,
    #[schema(example = "1 week")]
    pub turnaround: Option<String>,
    pub is_starting_price: Option<bool>,
    pub is_monthly: Option<bool>,
}

impl From<ServiceRequest> for ServiceDraft {
    fn from(req: ServiceRequest) -> Self {
        ServiceDraft {
            name: req.name,
            price_usd: req.price_usd,
            turnaround: req.turnaround,
            is_starting_price: req.is_starting_price,
            is_monthly: req.is_monthly,
        }
    }
}

impl From<ServiceRequest> for ServiceChanges {
    fn from(req: ServiceRequest) -> Self {
        ServiceChanges {
            name: non_blank(req.name),
            price_usd: req.price_usd,
            turnaround: non_blank(req.turnaround),
            is_starting_price: req.is_starting_price,
            is_monthly: req.is_monthly,
        }
    }
}

fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(e) => ApiResponse::validation_error(&e.to_string()),
        ServiceError::NotFound => ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found"),
        ServiceError::Repository(e) => {
            error!("Failed to {} service: {}", action, e);
            ApiResponse::internal_error()
        }
    }
}

/// List services, oldest first
///
/// An empty catalogue is filled with the default services on first read.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    responses(
        (status = 200, description = "Services", body = inline(SuccessResponse<Vec<ServiceOffering>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/services")]
pub async fn list_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.service.list.execute().await {
        Ok(services) => ApiResponse::success(services),
        Err(e) => error_response(e, "list"),
    }
}

/// Get a single service
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service", body = inline(SuccessResponse<ServiceOffering>)),
        (status = 404, description = "Service not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/services/{id}")]
pub async fn get_service_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.get.execute(path.into_inner()).await {
        Ok(service) => ApiResponse::success(service),
        Err(e) => error_response(e, "fetch"),
    }
}

/// Create a service
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "services",
    security(("BearerAuth" = [])),
    request_body = ServiceRequest,
    responses(
        (status = 201, description = "Service created", body = inline(SuccessResponse<ServiceOffering>)),
        (status = 400, description = "Missing name, priceUSD or turnaround", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/services")]
pub async fn create_service_handler(
    _admin: AdminUser,
    req: web::Json<ServiceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.create.execute(req.into_inner().into()).await {
        Ok(service) => ApiResponse::created(service),
        Err(e) => error_response(e, "create"),
    }
}

/// Update a service
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "services",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = ServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = inline(SuccessResponse<ServiceOffering>)),
        (status = 400, description = "Invalid priceUSD", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Service not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/services/{id}")]
pub async fn update_service_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ServiceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .service
        .update
        .execute(path.into_inner(), req.into_inner().into())
        .await
    {
        Ok(service) => ApiResponse::success(service),
        Err(e) => error_response(e, "update"),
    }
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "services",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted", body = inline(SuccessResponse<DeleteConfirmation>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Service not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/services/{id}")]
pub async fn delete_service_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.service.delete.execute(id).await {
        Ok(()) => {
            info!("Service {} deleted by {}", id, admin.claims.uid);
            ApiResponse::success(DeleteConfirmation::new(id, "Service"))
        }
        Err(e) => error_response(e, "delete"),
    }
}
