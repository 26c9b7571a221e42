use serde::{Deserialize, Serialize};

/// Client-side filter state for the vacation list.
///
/// Both values are plain strings as typed into the UI controls: an empty
/// string means "no filter". Consumed only when a list reload is triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationFilter {
    pub employee: String,
    pub status: String,
}

impl VacationFilter {
    /// Number of active (non-empty) filter values
    pub fn active_count(&self) -> usize {
        [&self.employee, &self.status]
            .iter()
            .filter(|v| !v.is_empty())
            .count()
    }

    /// Build the query string for GET /api/vacations.
    ///
    /// Empty values are omitted entirely; non-empty values are URL-encoded.
    /// Returns "" when no filter is active, "?employee=...&status=..." otherwise.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if !self.employee.is_empty() {
            params.push(format!("employee={}", urlencoding::encode(&self.employee)));
        }
        if !self.status.is_empty() {
            params.push(format!("status={}", urlencoding::encode(&self.status)));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_produces_no_query_string() {
        assert_eq!(VacationFilter::default().to_query_string(), "");
    }

    #[test]
    fn empty_values_are_omitted() {
        let f = VacationFilter {
            employee: String::new(),
            status: "pending".into(),
        };
        assert_eq!(f.to_query_string(), "?status=pending");

        let f = VacationFilter {
            employee: "iva".into(),
            status: String::new(),
        };
        assert_eq!(f.to_query_string(), "?employee=iva");
    }

    #[test]
    fn both_values_joined_with_ampersand() {
        let f = VacationFilter {
            employee: "smith".into(),
            status: "approved".into(),
        };
        assert_eq!(f.to_query_string(), "?employee=smith&status=approved");
    }

    #[test]
    fn values_are_url_encoded() {
        let f = VacationFilter {
            employee: "a b&c".into(),
            status: String::new(),
        };
        assert_eq!(f.to_query_string(), "?employee=a%20b%26c");
    }

    #[test]
    fn active_count_tracks_non_empty_values() {
        assert_eq!(VacationFilter::default().active_count(), 0);
        let f = VacationFilter {
            employee: "x".into(),
            status: "rejected".into(),
        };
        assert_eq!(f.active_count(), 2);
    }
}
