//! Health check handlers
//!
//! Liveness never touches dependencies; readiness pings the database.

use axum::{extract::State, http::StatusCode, Json};
use blog_service::dto::{HealthChecks, HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Liveness probe
///
/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe
///
/// `GET /health/ready`
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let database = match state.pool().acquire().await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Database readiness check failed");
            false
        }
    };

    let status_code = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            status: if database { "ready" } else { "unavailable" },
            checks: HealthChecks { database },
        }),
    )
}
