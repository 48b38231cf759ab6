/// Health check endpoint
///
/// Verifies the server is running and the database answers queries.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": "connected",
///   "pool": {
///     "active_connections": 1,
///     "idle_connections": 1,
///     "total_connections": 2
///   }
/// }
/// ```

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskmanager_shared::db::pool::{self, PoolStats};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,

    /// Connection pool usage at the time of the check
    pub pool: PoolStats,
}

/// Health check handler
///
/// Always answers 200; a failing database is reported as `degraded`.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_status = match pool::health_check(&state.db).await {
        Ok(()) => "connected",
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            "disconnected"
        }
    };

    Json(HealthResponse {
        status: if database_status == "connected" {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database_status.to_string(),
        pool: pool::get_pool_stats(&state.db),
    })
}
