use serde::{Deserialize, Serialize};

/// Aggregate counts shown on the dashboard cards.
///
/// Purely derived on the server, never mutated client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let json = r#"{"total":10,"pending":4,"approved":5,"rejected":1}"#;
        let s: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.total, 10);
        assert_eq!(s.pending, 4);
        assert_eq!(serde_json::to_string(&s).unwrap(), json);
    }
}
