use gloo_net::http::{Request, Response};

use contracts::domain::vacation::aggregate::{
    StatusUpdateDto, VacationRequest, VacationRequestDto, VacationStatus,
};
use contracts::domain::vacation::filter::VacationFilter;
use contracts::shared::error::ErrorBody;
use contracts::shared::stats::StatsSummary;

use crate::shared::api_utils::api_base;

/// Pull the server's `{error}` message out of a failed response,
/// falling back to a generic text when the body is not parseable.
async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => fallback.to_string(),
    }
}

/// Fetch the vacation list with the given filter applied
pub async fn fetch_vacations(filter: &VacationFilter) -> Result<Vec<VacationRequest>, String> {
    let url = format!("{}/api/vacations{}", api_base(), filter.to_query_string());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch vacations: {}", response.status()));
    }

    response
        .json::<Vec<VacationRequest>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single vacation request by id
pub async fn fetch_by_id(id: i64) -> Result<VacationRequest, String> {
    let response = Request::get(&format!("{}/api/vacations/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch vacation: {}", response.status()));
    }

    response
        .json::<VacationRequest>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch aggregate counts
pub async fn fetch_stats() -> Result<StatsSummary, String> {
    let response = Request::get(&format!("{}/api/stats", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch stats: {}", response.status()));
    }

    response
        .json::<StatsSummary>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new vacation request.
///
/// On failure the returned message is the server-provided error when
/// available, so the form can show the exact validation problem.
pub async fn create_vacation(dto: &VacationRequestDto) -> Result<VacationRequest, String> {
    let response = Request::post(&format!("{}/api/vacations", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to create vacation request").await);
    }

    response
        .json::<VacationRequest>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Partial update of a single record's status. The body carries the
/// status and nothing else.
pub async fn update_status(id: i64, status: VacationStatus) -> Result<(), String> {
    let dto = StatusUpdateDto::new(status);

    let response = Request::patch(&format!("{}/api/vacations/{}", api_base(), id))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update status: {}", response.status()));
    }

    Ok(())
}

/// Full replace of the editable fields of one record
pub async fn update_vacation(id: i64, dto: &VacationRequestDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/vacations/{}", api_base(), id))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update vacation: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_vacation(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/vacations/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete vacation: {}", response.status()));
    }

    Ok(())
}
