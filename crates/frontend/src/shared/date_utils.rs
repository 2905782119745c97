/// Utilities for date and time formatting
///
/// The backend sends ISO-8601 strings, with or without offset and fraction.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let trimmed = datetime_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    format_date(datetime_str)
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.trim().split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Current instant, from the browser clock.
pub fn now_utc() -> DateTime<chrono::Utc> {
    let millis = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-12-31T23:59:59.5+07:00"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_datetime("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
