pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::health::Readiness;
use crate::modules::auth::adapter::incoming::web::extractors::AuthGate;
use crate::modules::auth::adapter::outgoing::firebase::{
    FirebaseConfig, FirebaseTokenVerifier, HttpJwkSource,
};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::{AdminPolicy, IdentityVerifier};
use crate::modules::auth::application::service::{AllowedEmailsPolicy, SignInWithGoogleService};
use crate::modules::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::currency::adapter::outgoing::{
    ExchangeRateApi, IpapiLocator, MemoryRatesCache, RedisRatesCache,
};
use crate::modules::currency::application::currency_use_cases::CurrencyUseCases;
use crate::modules::currency::application::ports::outgoing::RatesCache;
use crate::modules::email::adapter::outgoing::{LogEmailSender, SmtpEmailSender};
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::media::adapter::outgoing::GcsObjectStorage;
use crate::modules::media::application::domain::upload_policy::UploadPolicy;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::pricing::adapter::outgoing::PricingRepositoryPostgres;
use crate::modules::pricing::application::pricing_use_cases::PricingUseCases;
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::resume::adapter::outgoing::ResumeRepositoryPostgres;
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::service::adapter::outgoing::ServiceRepositoryPostgres;
use crate::modules::service::application::service_use_cases::ServiceUseCases;
use crate::modules::version::adapter::outgoing::{JsonVersionFile, VersionRepositoryPostgres};
use crate::modules::version::application::version_use_cases::VersionUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config, ApiResponse};

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

const RATES_TTL: Duration = Duration::from_secs(60 * 60);
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub pricing: PricingUseCases,
    pub service: ServiceUseCases,
    pub resume: ResumeUseCases,
    pub contact: ContactUseCases,
    pub version: VersionUseCases,
    pub media: MediaUseCases,
    pub currency: CurrencyUseCases,
    pub auth: AuthUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!("Starting portfolio API ({} environment)", env);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // TLS provider for rediss:// connections
    let _ = rustls::crypto::ring::default_provider().install_default();

    // Redis is optional; rates fall back to an in-process cache
    let redis_arc = match &config.redis_url {
        Some(url) => {
            let pool = Config::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            Some(Arc::new(pool))
        }
        None => {
            warn!("REDIS_URL not set, exchange rates are cached in memory");
            None
        }
    };

    let http = reqwest::Client::builder()
        .timeout(OUTBOUND_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    // Auth
    let firebase = FirebaseConfig::new(config.firebase_project_id.clone());
    let jwk_source = HttpJwkSource::new(http.clone(), firebase.jwks_url.clone());
    let verifier: Arc<dyn IdentityVerifier + Send + Sync> =
        Arc::new(FirebaseTokenVerifier::new(firebase, jwk_source));
    let policy: Arc<dyn AdminPolicy + Send + Sync> =
        Arc::new(AllowedEmailsPolicy::new(config.admin_emails.iter()));
    let auth_gate = AuthGate::new(verifier.clone(), policy.clone());

    // Email
    let sender: Arc<dyn EmailSender + Send + Sync> = match &config.smtp {
        Some(smtp) => Arc::new(
            SmtpEmailSender::new(&smtp.server, &smtp.username, &smtp.password, &smtp.from)
                .context("Invalid SMTP settings")?,
        ),
        None => {
            warn!("SMTP not configured, contact messages are only logged");
            Arc::new(LogEmailSender)
        }
    };

    // Currency
    let rates_cache: Arc<dyn RatesCache + Send + Sync> = match &redis_arc {
        Some(pool) => Arc::new(RedisRatesCache::new(Arc::clone(pool), RATES_TTL)),
        None => Arc::new(MemoryRatesCache::new(RATES_TTL)),
    };

    let state = AppState {
        project: ProjectUseCases::new(
            ProjectRepositoryPostgres::new(Arc::clone(&db_arc)),
            ProjectQueryPostgres::new(Arc::clone(&db_arc)),
        ),
        pricing: PricingUseCases::from_repository(PricingRepositoryPostgres::new(Arc::clone(
            &db_arc,
        ))),
        service: ServiceUseCases::from_repository(ServiceRepositoryPostgres::new(Arc::clone(
            &db_arc,
        ))),
        resume: ResumeUseCases::from_repository(ResumeRepositoryPostgres::new(Arc::clone(
            &db_arc,
        ))),
        contact: ContactUseCases::new(
            ContactRepositoryPostgres::new(Arc::clone(&db_arc)),
            sender,
            config.primary_admin_email(),
        ),
        version: VersionUseCases::new(
            VersionRepositoryPostgres::new(Arc::clone(&db_arc)),
            JsonVersionFile::new(config.version_file.clone()),
        ),
        media: MediaUseCases::new(
            Arc::new(GcsObjectStorage::new(
                config.storage_bucket.clone(),
                config.firebase_service_account_json.clone(),
            )),
            UploadPolicy::new(config.storage_bucket.clone()),
        ),
        currency: CurrencyUseCases::new(
            Arc::new(ExchangeRateApi::new(http.clone(), config.exchange_rate_api_url.clone())),
            rates_cache,
            Arc::new(IpapiLocator::new(http, config.geolocation_api_url.clone())),
        ),
        auth: AuthUseCases {
            sign_in: Arc::new(SignInWithGoogleService::new(verifier, policy)),
        },
    };

    let readiness = Readiness {
        db: Arc::clone(&db_arc),
        redis: redis_arc,
    };
    let origins = config.cors_allowed_origins.clone();
    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(security_headers())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(auth_gate.clone()))
            .app_data(web::Data::new(readiness.clone()))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
            .default_service(web::route().to(route_not_found))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn security_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Cross-Origin-Opener-Policy", "same-origin"))
        .add(("X-DNS-Prefetch-Control", "off"))
        .add((
            "Strict-Transport-Security",
            "max-age=15552000; includeSubDomains",
        ))
}

async fn route_not_found() -> HttpResponse {
    ApiResponse::not_found("NOT_FOUND", "Route not found")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{auth, contact, currency, media, pricing, project, resume, service, version};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::google_sign_in_handler);
    cfg.service(auth::adapter::incoming::web::routes::verify_session_handler);
    // Projects
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    // Pricing
    cfg.service(pricing::adapter::incoming::web::routes::list_pricing_plans_handler);
    cfg.service(pricing::adapter::incoming::web::routes::get_pricing_plan_handler);
    cfg.service(pricing::adapter::incoming::web::routes::create_pricing_plan_handler);
    cfg.service(pricing::adapter::incoming::web::routes::update_pricing_plan_handler);
    cfg.service(pricing::adapter::incoming::web::routes::delete_pricing_plan_handler);
    // Services
    cfg.service(service::adapter::incoming::web::routes::list_services_handler);
    cfg.service(service::adapter::incoming::web::routes::get_service_handler);
    cfg.service(service::adapter::incoming::web::routes::create_service_handler);
    cfg.service(service::adapter::incoming::web::routes::update_service_handler);
    cfg.service(service::adapter::incoming::web::routes::delete_service_handler);
    // Resume
    cfg.service(resume::adapter::incoming::web::routes::list_experiences_handler);
    cfg.service(resume::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(resume::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(resume::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(resume::adapter::incoming::web::routes::delete_experience_handler);
    cfg.service(resume::adapter::incoming::web::routes::list_education_handler);
    cfg.service(resume::adapter::incoming::web::routes::get_education_handler);
    cfg.service(resume::adapter::incoming::web::routes::create_education_handler);
    cfg.service(resume::adapter::incoming::web::routes::update_education_handler);
    cfg.service(resume::adapter::incoming::web::routes::delete_education_handler);
    cfg.service(resume::adapter::incoming::web::routes::list_skills_handler);
    cfg.service(resume::adapter::incoming::web::routes::get_skill_category_handler);
    cfg.service(resume::adapter::incoming::web::routes::create_skill_category_handler);
    cfg.service(resume::adapter::incoming::web::routes::update_skill_category_handler);
    cfg.service(resume::adapter::incoming::web::routes::delete_skill_category_handler);
    cfg.service(resume::adapter::incoming::web::routes::list_certifications_handler);
    cfg.service(resume::adapter::incoming::web::routes::get_certification_handler);
    cfg.service(resume::adapter::incoming::web::routes::create_certification_handler);
    cfg.service(resume::adapter::incoming::web::routes::update_certification_handler);
    cfg.service(resume::adapter::incoming::web::routes::delete_certification_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::get_contact_details_handler);
    cfg.service(contact::adapter::incoming::web::routes::update_contact_details_handler);
    cfg.service(contact::adapter::incoming::web::routes::send_contact_message_handler);
    // Version
    cfg.service(version::adapter::incoming::web::routes::get_version_handler);
    cfg.service(version::adapter::incoming::web::routes::update_version_handler);
    // Upload
    cfg.service(media::adapter::incoming::web::routes::upload_file_handler);
    cfg.service(media::adapter::incoming::web::routes::delete_file_handler);
    // Currency
    cfg.service(currency::adapter::incoming::web::routes::list_currencies_handler);
    cfg.service(currency::adapter::incoming::web::routes::get_rates_handler);
    cfg.service(currency::adapter::incoming::web::routes::convert_price_handler);
    cfg.service(currency::adapter::incoming::web::routes::detect_currency_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
