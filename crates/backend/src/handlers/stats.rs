use axum::Json;
use contracts::shared::stats::StatsSummary;

use crate::domain::vacation::service;

/// GET /api/stats
pub async fn get_stats() -> Result<Json<StatsSummary>, axum::http::StatusCode> {
    match service::stats().await {
        Ok(s) => Ok(Json(s)),
        Err(e) => {
            tracing::error!("stats handler error: {e}");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
