use chrono::NaiveDate;
use crate::errors::{HrError, HrResult};

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// `2025-03-01T08:15:00` -> `2025-03-01`
pub fn date_part(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.split('T').next().unwrap_or(v).to_string(),
        _ => "-".to_string(),
    }
}

/// `2025-03-01T08:15:00` -> `08:15`
pub fn time_part(value: Option<&str>) -> Option<String> {
    value
        .and_then(|v| v.split_once('T'))
        .map(|(_, time)| time.chars().take(5).collect())
}

pub fn parse_date(field: &str, value: &str) -> HrResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| HrError::validation_error(field, value, "expected a date in YYYY-MM-DD format"))
}

/// Midnight UTC timestamp for a calendar date, as the backend expects for project dates.
pub fn date_to_iso(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_iso_timestamps() {
        assert_eq!(date_part(Some("2025-03-01T08:15:00")), "2025-03-01");
        assert_eq!(date_part(Some("2025-03-01")), "2025-03-01");
        assert_eq!(date_part(None), "-");
        assert_eq!(time_part(Some("2025-03-01T08:15:00")), Some("08:15".to_string()));
        assert_eq!(time_part(Some("2025-03-01")), None);
    }

    #[test]
    fn validates_dates() {
        let date = parse_date("ngayBatDau", "2025-02-28").unwrap();
        assert_eq!(date_to_iso(date), "2025-02-28T00:00:00.000Z");
        assert!(parse_date("ngayBatDau", "28/02/2025").is_err());
    }

    #[test]
    fn dash_for_blank_values() {
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("IT")), "IT");
        assert_eq!(or_dash(None), "-");
    }
}
