use axum::{routing::get, Router};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/vacations",
            get(handlers::vacation::list).post(handlers::vacation::create),
        )
        .route(
            "/api/vacations/:id",
            get(handlers::vacation::get_by_id)
                .patch(handlers::vacation::update_status)
                .put(handlers::vacation::update)
                .delete(handlers::vacation::delete),
        )
        .route("/api/stats", get(handlers::stats::get_stats))
}
