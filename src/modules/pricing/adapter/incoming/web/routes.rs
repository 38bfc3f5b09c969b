use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::pricing::application::domain::entities::{BillingPeriod, PricingPlan};
use crate::modules::pricing::application::ports::incoming::use_cases::{
    PricingError, PricingPlanDraft,
};
use crate::modules::pricing::application::ports::outgoing::pricing_repository::PricingPlanChanges;
use crate::shared::api::{ApiResponse, DeleteConfirmation};
use crate::shared::validation::non_blank;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlanRequest {
    #[schema(example = "Starter")]
    pub name: Option<String>,
    #[schema(example = 499.0)]
    pub price: Option<f64>,
    pub period: Option<BillingPeriod>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
}

impl From<PricingPlanRequest> for PricingPlanDraft {
    fn from(req: PricingPlanRequest) -> Self {
        PricingPlanDraft {
            name: req.name,
            price: req.price,
            period: req.period,
            description: req.description,
            features: req.features,
            popular: req.popular,
        }
    }
}

impl From<PricingPlanRequest> for PricingPlanChanges {
    fn from(req: PricingPlanRequest) -> Self {
        PricingPlanChanges {
            name: non_blank(req.name),
            price: req.price,
            period: req.period,
            description: req.description,
            features: req.features,
            popular: req.popular,
        }
    }
}

fn error_response(err: PricingError, action: &str) -> HttpResponse {
    match err {
        PricingError::Validation(e) => ApiResponse::validation_error(&e.to_string()),
        PricingError::NotFound => {
            ApiResponse::not_found("PRICING_PLAN_NOT_FOUND", "Pricing plan not found")
        }
        PricingError::Repository(e) => {
            error!("Failed to {} pricing plan: {}", action, e);
            ApiResponse::internal_error()
        }
    }
}

/// List pricing plans, cheapest first
#[utoipa::path(
    get,
    path = "/api/pricing",
    tag = "pricing",
    responses(
        (status = 200, description = "Pricing plans", body = inline(SuccessResponse<Vec<PricingPlan>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/pricing")]
pub async fn list_pricing_plans_handler(data: web::Data<AppState>) -> impl Responder {
    match data.pricing.list.execute().await {
        Ok(plans) => ApiResponse::success(plans),
        Err(e) => error_response(e, "list"),
    }
}

/// Get a single pricing plan
#[utoipa::path(
    get,
    path = "/api/pricing/{id}",
    tag = "pricing",
    params(("id" = Uuid, Path, description = "Pricing plan ID")),
    responses(
        (status = 200, description = "Pricing plan", body = inline(SuccessResponse<PricingPlan>)),
        (status = 404, description = "Pricing plan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/pricing/{id}")]
pub async fn get_pricing_plan_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.pricing.get.execute(path.into_inner()).await {
        Ok(plan) => ApiResponse::success(plan),
        Err(e) => error_response(e, "fetch"),
    }
}

/// Create a pricing plan
#[utoipa::path(
    post,
    path = "/api/pricing",
    tag = "pricing",
    security(("BearerAuth" = [])),
    request_body = PricingPlanRequest,
    responses(
        (status = 201, description = "Pricing plan created", body = inline(SuccessResponse<PricingPlan>)),
        (status = 400, description = "Missing name or price", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/pricing")]
pub async fn create_pricing_plan_handler(
    _admin: AdminUser,
    req: web::Json<PricingPlanRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.pricing.create.execute(req.into_inner().into()).await {
        Ok(plan) => ApiResponse::created(plan),
        Err(e) => error_response(e, "create"),
    }
}

/// Update a pricing plan
#[utoipa::path(
    put,
    path = "/api/pricing/{id}",
    tag = "pricing",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Pricing plan ID")),
    request_body = PricingPlanRequest,
    responses(
        (status = 200, description = "Pricing plan updated", body = inline(SuccessResponse<PricingPlan>)),
        (status = 400, description = "Invalid price", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Pricing plan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/pricing/{id}")]
pub async fn update_pricing_plan_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PricingPlanRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .pricing
        .update
        .execute(path.into_inner(), req.into_inner().into())
        .await
    {
        Ok(plan) => ApiResponse::success(plan),
        Err(e) => error_response(e, "update"),
    }
}

/// Delete a pricing plan
#[utoipa::path(
    delete,
    path = "/api/pricing/{id}",
    tag = "pricing",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Pricing plan ID")),
    responses(
        (status = 200, description = "Pricing plan deleted", body = inline(SuccessResponse<DeleteConfirmation>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Pricing plan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/pricing/{id}")]
pub async fn delete_pricing_plan_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.pricing.delete.execute(id).await {
        Ok(()) => {
            info!("Pricing plan {} deleted by {}", id, admin.claims.uid);
            ApiResponse::success(DeleteConfirmation::new(id, "Pricing plan"))
        }
        Err(e) => error_response(e, "delete"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::pricing::application::ports::incoming::use_cases::{
        CreatePricingPlanUseCase, DeletePricingPlanUseCase, GetPricingPlanUseCase,
        ListPricingPlansUseCase, UpdatePricingPlanUseCase,
    };
    use crate::modules::pricing::application::pricing_use_cases::PricingUseCases;
    use crate::shared::api::{custom_json_config, custom_path_config};
    use crate::shared::validation::ValidationError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{auth_gate, bearer, ADMIN_TOKEN, VISITOR_TOKEN};

    /* --------------------------------------------------
     * In-memory pricing use cases
     * -------------------------------------------------- */

    #[derive(Default)]
    struct InMemoryPricing {
        plans: Mutex<Vec<PricingPlan>>,
        fail: bool,
    }

    impl InMemoryPricing {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn seeded(plans: Vec<PricingPlan>) -> Self {
            Self {
                plans: Mutex::new(plans),
                fail: false,
            }
        }

        fn check(&self) -> Result<(), PricingError> {
            if self.fail {
                Err(PricingError::Repository("db offline".into()))
            } else {
                Ok(())
            }
        }
    }

    fn plan(name: &str, price: f64) -> PricingPlan {
        let now = Utc::now();
        PricingPlan {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            period: BillingPeriod::Project,
            description: String::new(),
            features: vec![],
            popular: false,
            created_at: now - Duration::minutes(5),
            updated_at: now - Duration::minutes(5),
        }
    }

    #[async_trait]
    impl ListPricingPlansUseCase for InMemoryPricing {
        async fn execute(&self) -> Result<Vec<PricingPlan>, PricingError> {
            self.check()?;
            let mut plans = self.plans.lock().unwrap().clone();
            plans.sort_by(|a, b| a.price.total_cmp(&b.price));
            Ok(plans)
        }
    }

    #[async_trait]
    impl GetPricingPlanUseCase for InMemoryPricing {
        async fn execute(&self, id: Uuid) -> Result<PricingPlan, PricingError> {
            self.check()?;
            self.plans
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(PricingError::NotFound)
        }
    }

    #[async_trait]
    impl CreatePricingPlanUseCase for InMemoryPricing {
        async fn execute(&self, draft: PricingPlanDraft) -> Result<PricingPlan, PricingError> {
            self.check()?;
            if draft.name.is_none() || draft.price.is_none() {
                return Err(ValidationError::MissingFields(vec!["name", "price"]).into());
            }
            let mut created = plan(&draft.name.unwrap_or_default(), draft.price.unwrap_or_default());
            created.features = draft.features.unwrap_or_default();
            created.period = draft.period.unwrap_or_default();
            created.created_at = Utc::now();
            self.plans.lock().unwrap().push(created.clone());
            Ok(created)
        }
    }

    #[async_trait]
    impl UpdatePricingPlanUseCase for InMemoryPricing {
        async fn execute(
            &self,
            id: Uuid,
            changes: PricingPlanChanges,
        ) -> Result<PricingPlan, PricingError> {
            self.check()?;
            let mut plans = self.plans.lock().unwrap();
            let p = plans
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(PricingError::NotFound)?;
            if let Some(name) = changes.name {
                p.name = name;
            }
            if let Some(price) = changes.price {
                p.price = price;
            }
            Ok(p.clone())
        }
    }

    #[async_trait]
    impl DeletePricingPlanUseCase for InMemoryPricing {
        async fn execute(&self, id: Uuid) -> Result<(), PricingError> {
            self.check()?;
            let mut plans = self.plans.lock().unwrap();
            let before = plans.len();
            plans.retain(|p| p.id != id);
            if plans.len() == before {
                return Err(PricingError::NotFound);
            }
            Ok(())
        }
    }

    fn use_cases(store: InMemoryPricing) -> PricingUseCases {
        let store = Arc::new(store);
        PricingUseCases {
            list: store.clone(),
            get: store.clone(),
            create: store.clone(),
            update: store.clone(),
            delete: store,
        }
    }

    macro_rules! pricing_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_pricing(use_cases($store))
                            .build(),
                    )
                    .app_data(auth_gate())
                    .app_data(custom_json_config())
                    .app_data(custom_path_config())
                    .service(list_pricing_plans_handler)
                    .service(get_pricing_plan_handler)
                    .service(create_pricing_plan_handler)
                    .service(update_pricing_plan_handler)
                    .service(delete_pricing_plan_handler),
            )
            .await
        };
    }

    /* --------------------------------------------------
     * Scenarios
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_then_list_sorts_by_price() {
        let app = pricing_app!(InMemoryPricing::seeded(vec![
            plan("Pro", 1500.0),
            plan("Hourly", 60.0),
        ]));

        let req = test::TestRequest::post()
            .uri("/api/pricing")
            .insert_header(bearer(ADMIN_TOKEN))
            .set_json(json!({
                "name": "Starter",
                "price": 499,
                "period": "project",
                "description": "...",
                "features": ["A", "B"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["id"].is_string());
        assert_eq!(body["data"]["features"].as_array().unwrap().len(), 2);

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/pricing").to_request())
                .await;
        let body: Value = test::read_body_json(resp).await;
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Hourly", "Starter", "Pro"]);
    }

    #[actix_web::test]
    async fn test_create_then_get_returns_same_fields() {
        let app = pricing_app!(InMemoryPricing::default());

        let req = test::TestRequest::post()
            .uri("/api/pricing")
            .insert_header(bearer(ADMIN_TOKEN))
            .set_json(json!({ "name": "Retainer", "price": 900.5, "period": "month" }))
            .to_request();
        let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/api/pricing/{id}"))
            .to_request();
        let fetched: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(fetched["data"]["name"], "Retainer");
        assert_eq!(fetched["data"]["price"], 900.5);
        assert_eq!(fetched["data"]["period"], "month");
    }

    #[actix_web::test]
    async fn test_create_missing_fields_is_validation_error() {
        let app = pricing_app!(InMemoryPricing::default());

        let req = test::TestRequest::post()
            .uri("/api/pricing")
            .insert_header(bearer(ADMIN_TOKEN))
            .set_json(json!({ "description": "no name" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Missing required fields: name, price");
    }

    #[actix_web::test]
    async fn test_update_unknown_plan_not_found() {
        let app = pricing_app!(InMemoryPricing::default());

        let req = test::TestRequest::put()
            .uri(&format!("/api/pricing/{}", Uuid::new_v4()))
            .insert_header(bearer(ADMIN_TOKEN))
            .set_json(json!({ "popular": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PRICING_PLAN_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_update_merges_and_ignores_blank_name() {
        let existing = plan("Starter", 499.0);
        let id = existing.id;
        let app = pricing_app!(InMemoryPricing::seeded(vec![existing]));

        let req = test::TestRequest::put()
            .uri(&format!("/api/pricing/{id}"))
            .insert_header(bearer(ADMIN_TOKEN))
            .set_json(json!({ "name": " ", "price": 550 }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["data"]["name"], "Starter");
        assert_eq!(body["data"]["price"], 550.0);
    }

    #[actix_web::test]
    async fn test_delete_then_delete_again_is_not_found() {
        let existing = plan("Starter", 499.0);
        let id = existing.id;
        let app = pricing_app!(InMemoryPricing::seeded(vec![existing]));

        let first = test::TestRequest::delete()
            .uri(&format!("/api/pricing/{id}"))
            .insert_header(bearer(ADMIN_TOKEN))
            .to_request();
        let resp = test::call_service(&app, first).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Pricing plan deleted successfully");

        let second = test::TestRequest::delete()
            .uri(&format!("/api/pricing/{id}"))
            .insert_header(bearer(ADMIN_TOKEN))
            .to_request();
        assert_eq!(
            test::call_service(&app, second).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_list_repository_error_is_internal_error() {
        let app = pricing_app!(InMemoryPricing::failing());

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/pricing").to_request())
                .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "An unexpected error occurred");
    }

    #[actix_web::test]
    async fn test_writes_require_admin() {
        let app = pricing_app!(InMemoryPricing::default());

        let anon = test::TestRequest::post()
            .uri("/api/pricing")
            .set_json(json!({ "name": "X", "price": 1 }))
            .to_request();
        assert_eq!(
            test::call_service(&app, anon).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let visitor = test::TestRequest::delete()
            .uri(&format!("/api/pricing/{}", Uuid::new_v4()))
            .insert_header(bearer(VISITOR_TOKEN))
            .to_request();
        assert_eq!(
            test::call_service(&app, visitor).await.status(),
            StatusCode::FORBIDDEN
        );
    }
}
