use chrono::NaiveDate;

use crate::{calendar::MonthView, errors::Error};

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::Config(format!("Invalid date {s:?}: {e}")))
}

/// Parses an optional ISO date, treating `None` as no selection.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, Error> {
    s.map(parse_date).transpose()
}

/// Validates a year/month pair from the command line.
pub fn parse_month(year: i32, month: u32) -> Result<MonthView, Error> {
    MonthView::new(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let d = parse_date(" 2024-02-29 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        // Test error cases
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert!(parse_optional_date(Some("2024-01-01")).unwrap().is_some());
        assert!(parse_optional_date(Some("nope")).is_err());
    }

    #[test]
    fn test_parse_month() {
        let view = parse_month(2026, 10).unwrap();
        assert_eq!(view.title(), "October 2026");
        assert!(matches!(
            parse_month(2026, 13),
            Err(Error::InvalidDate { month: 13, .. })
        ));
    }
}
