use chrono::NaiveDate;
use contracts::domain::vacation::aggregate::{
    StatusUpdateDto, VacationRequest, VacationRequestDto, VacationStatus,
};
use contracts::shared::stats::StatsSummary;
use thiserror::Error;

use super::repository;

#[derive(Debug, Error)]
pub enum VacationError {
    #[error("{0}")]
    Validation(String),
    #[error("Vacation request not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

fn parse_date(s: &str) -> Result<NaiveDate, VacationError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| VacationError::Validation("Invalid date format. Use YYYY-MM-DD".into()))
}

/// Date rules applied on create: the range must be well-ordered and must
/// not start before `today`. Full edits deliberately skip the past-date
/// rule so historical records can still be corrected.
fn validate_dates(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<(), VacationError> {
    if start > end {
        return Err(VacationError::Validation(
            "End date cannot be earlier than start date".into(),
        ));
    }
    if start < today {
        return Err(VacationError::Validation(
            "Cannot create a request for a past date".into(),
        ));
    }
    Ok(())
}

pub async fn list(
    employee: Option<&str>,
    status: Option<&str>,
) -> Result<Vec<VacationRequest>, VacationError> {
    Ok(repository::list(employee, status).await?)
}

pub async fn get_by_id(id: i64) -> Result<VacationRequest, VacationError> {
    repository::get_by_id(id)
        .await?
        .ok_or(VacationError::NotFound)
}

pub async fn create(dto: VacationRequestDto) -> Result<VacationRequest, VacationError> {
    if dto.employee_name.trim().is_empty()
        || dto.start_date.trim().is_empty()
        || dto.end_date.trim().is_empty()
    {
        return Err(VacationError::Validation("Missing required fields".into()));
    }

    let start = parse_date(&dto.start_date)?;
    let end = parse_date(&dto.end_date)?;
    validate_dates(start, end, chrono::Utc::now().date_naive())?;

    Ok(repository::insert(&dto.employee_name, start, end).await?)
}

pub async fn update_status(id: i64, dto: StatusUpdateDto) -> Result<VacationRequest, VacationError> {
    let status = VacationStatus::parse(&dto.status).map_err(VacationError::Validation)?;
    repository::set_status(id, status)
        .await?
        .ok_or(VacationError::NotFound)
}

/// Full replace of the three editable fields
pub async fn update(id: i64, dto: VacationRequestDto) -> Result<VacationRequest, VacationError> {
    if dto.employee_name.trim().is_empty() {
        return Err(VacationError::Validation("Missing required fields".into()));
    }
    let start = parse_date(&dto.start_date)?;
    let end = parse_date(&dto.end_date)?;

    repository::update_fields(id, &dto.employee_name, start, end)
        .await?
        .ok_or(VacationError::NotFound)
}

pub async fn delete(id: i64) -> Result<(), VacationError> {
    if repository::delete(id).await? {
        Ok(())
    } else {
        Err(VacationError::NotFound)
    }
}

pub async fn stats() -> Result<StatsSummary, VacationError> {
    Ok(repository::stats().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parse_date_accepts_iso_only() {
        assert!(parse_date("2025-07-01").is_ok());
        assert!(parse_date("01.07.2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = validate_dates(d("2025-07-14"), d("2025-07-01"), d("2025-06-01"));
        match err {
            Err(VacationError::Validation(msg)) => {
                assert!(msg.contains("End date"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn past_start_is_rejected() {
        let err = validate_dates(d("2025-05-01"), d("2025-05-10"), d("2025-06-01"));
        assert!(matches!(err, Err(VacationError::Validation(_))));
    }

    #[test]
    fn same_day_request_is_allowed() {
        assert!(validate_dates(d("2025-06-01"), d("2025-06-01"), d("2025-06-01")).is_ok());
    }
}
