//! Date/time boundary adapter.
//!
//! Fixture dates arrive either as ISO (`2025-12-13`) or as the display form used by the
//! fixture tables (`Saturday, December 13, 2025`). Nothing past `model` sees strings.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

const ISO_DATE: &str = "%Y-%m-%d";
const DISPLAY_DATE: &str = "%A, %B %d, %Y";

/// Parse an ISO or display-form date. The weekday of a display date must agree with
/// the calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    NaiveDate::parse_from_str(s, ISO_DATE)
        .or_else(|_| NaiveDate::parse_from_str(s, DISPLAY_DATE))
        .ok()
}

/// `HH:MM` or `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let s = raw.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Kick-off used when a fixture carries no explicit time.
pub fn default_kickoff(date: NaiveDate) -> NaiveTime {
    let (h, m) = match date.weekday() {
        Weekday::Sun => (14, 0),
        Weekday::Mon => (20, 0),
        _ => (15, 0),
    };
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

/// Display form, e.g. `Saturday, December 13, 2025`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_date_forms() {
        let iso = parse_date("2025-12-13").unwrap();
        let display = parse_date(" Saturday, December 13, 2025 ").unwrap();
        assert_eq!(iso, display);
    }

    #[test]
    fn rejects_inconsistent_weekday() {
        assert!(parse_date("Monday, December 13, 2025").is_none());
        assert!(parse_date("13/12/2025").is_none());
    }

    #[test]
    fn weekday_defaults() {
        let sat = parse_date("2025-12-13").unwrap();
        let sun = parse_date("2025-12-14").unwrap();
        let mon = parse_date("2025-12-15").unwrap();
        assert_eq!(default_kickoff(sat).to_string(), "15:00:00");
        assert_eq!(default_kickoff(sun).to_string(), "14:00:00");
        assert_eq!(default_kickoff(mon).to_string(), "20:00:00");
    }

    #[test]
    fn time_and_display_formatting() {
        assert_eq!(parse_time("18:30").unwrap().to_string(), "18:30:00");
        assert!(parse_time("6pm").is_none());
        let d = parse_date("2025-12-01").unwrap();
        assert_eq!(display_date(d), "Monday, December 1, 2025");
    }
}
