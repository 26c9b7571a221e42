use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Approval status of a vacation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacationStatus {
    Pending,
    Approved,
    Rejected,
}

impl VacationStatus {
    /// Wire value used in JSON bodies and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            VacationStatus::Pending => "pending",
            VacationStatus::Approved => "approved",
            VacationStatus::Rejected => "rejected",
        }
    }

    /// Label shown in the UI badge
    pub fn display_label(&self) -> &'static str {
        match self {
            VacationStatus::Pending => "Pending",
            VacationStatus::Approved => "Approved",
            VacationStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "pending" => Ok(VacationStatus::Pending),
            "approved" => Ok(VacationStatus::Approved),
            "rejected" => Ok(VacationStatus::Rejected),
            other => Err(format!(
                "Invalid status '{}'. Use: approved, rejected, pending",
                other
            )),
        }
    }
}

impl Default for VacationStatus {
    fn default() -> Self {
        VacationStatus::Pending
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// An employee's requested leave period and its approval status.
///
/// `id` and `created_at` are server-assigned and immutable.
/// `start_date <= end_date` is enforced by the backend only; clients
/// render whatever the server returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRequest {
    pub id: i64,

    #[serde(rename = "employeeName")]
    pub employee_name: String,

    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,

    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,

    pub status: VacationStatus,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of POST /api/vacations and PUT /api/vacations/:id.
///
/// Dates travel as raw `YYYY-MM-DD` strings so the backend can report
/// format errors instead of failing deserialization with a 422.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VacationRequestDto {
    #[serde(rename = "employeeName")]
    pub employee_name: String,

    #[serde(rename = "startDate")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    pub end_date: String,
}

/// Body of PATCH /api/vacations/:id. Carries the status and nothing else.
///
/// The status is a raw string so the backend can answer an unknown value
/// with a 400 `{error}` body rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateDto {
    pub status: String,
}

impl StatusUpdateDto {
    pub fn new(status: VacationStatus) -> Self {
        Self {
            status: status.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_values_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&VacationStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&VacationStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&VacationStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn status_parse_rejects_unknown_values() {
        assert_eq!(VacationStatus::parse("approved"), Ok(VacationStatus::Approved));
        assert!(VacationStatus::parse("cancelled").is_err());
        assert!(VacationStatus::parse("Pending").is_err());
    }

    #[test]
    fn vacation_request_uses_camel_case_on_the_wire() {
        let json = r#"{
            "id": 7,
            "employeeName": "Alice",
            "startDate": "2025-07-01",
            "endDate": "2025-07-14",
            "status": "pending",
            "createdAt": "2025-06-20T09:30:00Z"
        }"#;
        let v: VacationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(v.id, 7);
        assert_eq!(v.employee_name, "Alice");
        assert_eq!(v.start_date.to_string(), "2025-07-01");
        assert_eq!(v.status, VacationStatus::Pending);

        let back = serde_json::to_value(&v).unwrap();
        assert!(back.get("employeeName").is_some());
        assert!(back.get("employee_name").is_none());
    }

    #[test]
    fn status_patch_body_has_no_other_fields() {
        let dto = StatusUpdateDto::new(VacationStatus::Approved);
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"status":"approved"}"#
        );
    }
}
