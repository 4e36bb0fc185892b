//! Publish-date display formatting.

use chrono::{NaiveDate, NaiveDateTime};

/// Format a content-source timestamp ("2024-05-01T10:30:00", no zone) as
/// "May 1, 2024". Unparseable input is shown as-is rather than dropped.
pub fn display_date(raw: &str) -> String {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return datetime.format("%B %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_timestamp() {
        assert_eq!(display_date("2024-05-01T10:30:00"), "May 1, 2024");
    }

    #[test]
    fn formats_bare_date() {
        assert_eq!(display_date("2023-12-25"), "December 25, 2023");
    }

    #[test]
    fn passes_garbage_through() {
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
