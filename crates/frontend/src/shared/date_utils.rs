//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, NaiveDate, Utc};

/// Format a date as DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a timestamp as DD.MM.YYYY HH:MM:SS
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02:26"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(&d), "15.03.2024");
    }

    #[test]
    fn test_format_datetime() {
        let dt: DateTime<Utc> = "2024-03-15T14:02:26Z".parse().unwrap();
        assert_eq!(format_datetime(&dt), "15.03.2024 14:02:26");
        let dt: DateTime<Utc> = "2024-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_datetime(&dt), "31.12.2024 23:59:59");
    }
}
