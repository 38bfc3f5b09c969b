use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::health::{HealthResponse, ReadinessResponse};
use crate::modules::auth::adapter::incoming::web::routes::{
    GoogleSignInRequest, GoogleSignInResponse, VerifySessionResponse,
};
use crate::modules::auth::application::domain::entities::SessionUser;
use crate::modules::contact::adapter::incoming::web::routes::{
    ContactDetailsRequest, ContactMessageRequest, MessageReceipt,
};
use crate::modules::contact::application::domain::entities::ContactDetails;
use crate::modules::currency::adapter::incoming::web::routes::Conversion;
use crate::modules::currency::application::domain::currency::Currency;
use crate::modules::currency::application::ports::incoming::use_cases::{RateSnapshot, RateSource};
use crate::modules::media::application::domain::entities::UploadedFile;
use crate::modules::pricing::adapter::incoming::web::routes::PricingPlanRequest;
use crate::modules::pricing::application::domain::entities::{BillingPeriod, PricingPlan};
use crate::modules::project::adapter::incoming::web::routes::{
    CreateProjectRequest, UpdateProjectRequest,
};
use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::modules::resume::adapter::incoming::web::routes::{
    CertificationRequest, EducationRequest, ExperienceRequest, SkillCategoryRequest,
};
use crate::modules::resume::application::domain::entities::{
    Certification, Education, Experience, SkillCategory,
};
use crate::modules::service::adapter::incoming::web::routes::ServiceRequest;
use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::version::adapter::incoming::web::routes::UpdateVersionRequest;
use crate::modules::version::application::domain::entities::VersionRecord;
use crate::shared::api::DeleteConfirmation;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content and utility API behind the portfolio website",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth
        crate::modules::auth::adapter::incoming::web::routes::google_sign_in_handler,
        crate::modules::auth::adapter::incoming::web::routes::verify_session_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Pricing
        crate::modules::pricing::adapter::incoming::web::routes::list_pricing_plans_handler,
        crate::modules::pricing::adapter::incoming::web::routes::get_pricing_plan_handler,
        crate::modules::pricing::adapter::incoming::web::routes::create_pricing_plan_handler,
        crate::modules::pricing::adapter::incoming::web::routes::update_pricing_plan_handler,
        crate::modules::pricing::adapter::incoming::web::routes::delete_pricing_plan_handler,

        // Services
        crate::modules::service::adapter::incoming::web::routes::list_services_handler,
        crate::modules::service::adapter::incoming::web::routes::get_service_handler,
        crate::modules::service::adapter::incoming::web::routes::create_service_handler,
        crate::modules::service::adapter::incoming::web::routes::update_service_handler,
        crate::modules::service::adapter::incoming::web::routes::delete_service_handler,

        // Resume
        crate::modules::resume::adapter::incoming::web::routes::list_experiences_handler,
        crate::modules::resume::adapter::incoming::web::routes::get_experience_handler,
        crate::modules::resume::adapter::incoming::web::routes::create_experience_handler,
        crate::modules::resume::adapter::incoming::web::routes::update_experience_handler,
        crate::modules::resume::adapter::incoming::web::routes::delete_experience_handler,
        crate::modules::resume::adapter::incoming::web::routes::list_education_handler,
        crate::modules::resume::adapter::incoming::web::routes::get_education_handler,
        crate::modules::resume::adapter::incoming::web::routes::create_education_handler,
        crate::modules::resume::adapter::incoming::web::routes::update_education_handler,
        crate::modules::resume::adapter::incoming::web::routes::delete_education_handler,
        crate::modules::resume::adapter::incoming::web::routes::list_skills_handler,
        crate::modules::resume::adapter::incoming::web::routes::get_skill_category_handler,
        crate::modules::resume::adapter::incoming::web::routes::create_skill_category_handler,
        crate::modules::resume::adapter::incoming::web::routes::update_skill_category_handler,
        crate::modules::resume::adapter::incoming::web::routes::delete_skill_category_handler,
        crate::modules::resume::adapter::incoming::web::routes::list_certifications_handler,
        crate::modules::resume::adapter::incoming::web::routes::get_certification_handler,
        crate::modules::resume::adapter::incoming::web::routes::create_certification_handler,
        crate::modules::resume::adapter::incoming::web::routes::update_certification_handler,
        crate::modules::resume::adapter::incoming::web::routes::delete_certification_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::get_contact_details_handler,
        crate::modules::contact::adapter::incoming::web::routes::update_contact_details_handler,
        crate::modules::contact::adapter::incoming::web::routes::send_contact_message_handler,

        // Version
        crate::modules::version::adapter::incoming::web::routes::get_version_handler,
        crate::modules::version::adapter::incoming::web::routes::update_version_handler,

        // Upload
        crate::modules::media::adapter::incoming::web::routes::upload_file_handler,
        crate::modules::media::adapter::incoming::web::routes::delete_file_handler,

        // Currency
        crate::modules::currency::adapter::incoming::web::routes::list_currencies_handler,
        crate::modules::currency::adapter::incoming::web::routes::get_rates_handler,
        crate::modules::currency::adapter::incoming::web::routes::convert_price_handler,
        crate::modules::currency::adapter::incoming::web::routes::detect_currency_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<Project>,
            ErrorResponse,
            ErrorDetail,
            DeleteConfirmation,
            HealthResponse,
            ReadinessResponse,

            // Auth
            GoogleSignInRequest,
            GoogleSignInResponse,
            VerifySessionResponse,
            SessionUser,

            // Content
            Project,
            ProjectCategory,
            CreateProjectRequest,
            UpdateProjectRequest,
            PricingPlan,
            BillingPeriod,
            PricingPlanRequest,
            ServiceOffering,
            ServiceRequest,
            Experience,
            ExperienceRequest,
            Education,
            EducationRequest,
            SkillCategory,
            SkillCategoryRequest,
            Certification,
            CertificationRequest,
            ContactDetails,
            ContactDetailsRequest,
            ContactMessageRequest,
            MessageReceipt,
            VersionRecord,
            UpdateVersionRequest,

            // Utilities
            UploadedFile,
            Currency,
            RateSnapshot,
            RateSource,
            Conversion
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in with Google"),
        (name = "projects", description = "Portfolio projects"),
        (name = "pricing", description = "Pricing plans"),
        (name = "services", description = "Service offerings"),
        (name = "resume", description = "Resume sections"),
        (name = "contact", description = "Contact details and messages"),
        (name = "version", description = "Site version"),
        (name = "upload", description = "Public file uploads"),
        (name = "currency", description = "Display currency and exchange rates"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Firebase ID token of an admin account"))
                        .build(),
                ),
            )
        }
    }
}
