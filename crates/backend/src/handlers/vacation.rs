use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use contracts::domain::vacation::aggregate::{
    StatusUpdateDto, VacationRequest, VacationRequestDto,
};
use contracts::shared::error::ErrorBody;

use crate::domain::vacation::service::{self, VacationError};

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn map_error(e: VacationError) -> ApiError {
    match e {
        VacationError::Validation(msg) => (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))),
        VacationError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Vacation request not found")),
        ),
        VacationError::Internal(err) => {
            tracing::error!("vacation handler error: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Internal server error")),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListVacationsQuery {
    pub employee: Option<String>,
    pub status: Option<String>,
}

/// GET /api/vacations?employee=&status=
pub async fn list(
    Query(query): Query<ListVacationsQuery>,
) -> Result<Json<Vec<VacationRequest>>, ApiError> {
    let items = service::list(query.employee.as_deref(), query.status.as_deref())
        .await
        .map_err(map_error)?;
    Ok(Json(items))
}

/// GET /api/vacations/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<VacationRequest>, ApiError> {
    let item = service::get_by_id(id).await.map_err(map_error)?;
    Ok(Json(item))
}

/// POST /api/vacations
pub async fn create(
    Json(dto): Json<VacationRequestDto>,
) -> Result<(StatusCode, Json<VacationRequest>), ApiError> {
    let created = service::create(dto).await.map_err(map_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/vacations/:id
pub async fn update_status(
    Path(id): Path<i64>,
    Json(dto): Json<StatusUpdateDto>,
) -> Result<Json<VacationRequest>, ApiError> {
    let updated = service::update_status(id, dto).await.map_err(map_error)?;
    Ok(Json(updated))
}

/// PUT /api/vacations/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(dto): Json<VacationRequestDto>,
) -> Result<Json<VacationRequest>, ApiError> {
    let updated = service::update(id, dto).await.map_err(map_error)?;
    Ok(Json(updated))
}

/// DELETE /api/vacations/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    service::delete(id).await.map_err(map_error)?;
    Ok(StatusCode::NO_CONTENT)
}
