use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    status: &'static str,
    database: &'static str,
    /// `disabled` when no Redis is configured
    redis: &'static str,
}

/// Dependencies the readiness probe pings.
#[derive(Clone)]
pub struct Readiness {
    pub db: Arc<DatabaseConnection>,
    pub redis: Option<Arc<Pool>>,
}

impl Readiness {
    async fn database_status(&self) -> &'static str {
        let ping = Statement::from_string(self.db.get_database_backend(), "SELECT 1");
        match self.db.execute(ping).await {
            Ok(_) => "ok",
            Err(e) => {
                warn!("Readiness: database check failed: {}", e);
                "unhealthy"
            }
        }
    }

    async fn redis_status(&self) -> &'static str {
        let Some(pool) = &self.redis else {
            return "disabled";
        };

        let mut conn = match pool.get().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Readiness: redis pool error: {}", e);
                return "unhealthy";
            }
        };

        match deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
        {
            Ok(_) => "ok",
            Err(e) => {
                warn!("Readiness: redis check failed: {}", e);
                "unhealthy"
            }
        }
    }
}

/// Liveness probe, no I/O
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        message: "Portfolio API is running",
    })
}

/// Readiness probe, pings the database and Redis
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "health",
    responses(
        (status = 200, description = "All dependencies reachable", body = ReadinessResponse),
        (status = 503, description = "A dependency is down", body = ReadinessResponse)
    )
)]
#[get("/api/ready")]
pub async fn readiness(probe: web::Data<Readiness>) -> impl Responder {
    let database = probe.database_status().await;
    let redis = probe.redis_status().await;

    let healthy = database == "ok" && redis != "unhealthy";
    let body = ReadinessResponse {
        status: if healthy { "ok" } else { "unhealthy" },
        database,
        redis,
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
