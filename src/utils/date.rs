//! Date formatting for the header panel.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Format a timestamp as `MM/DD/YYYY` in the timestamp's own time zone.
///
/// Month and day are zero-padded to two digits; the year is printed in full.
pub fn format_date<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format!("{:02}/{:02}/{:04}", value.month(), value.day(), value.year())
}

/// Today's date on the local calendar.
pub fn today() -> String {
    format_date(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    fn is_mm_dd_yyyy(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 10
            && bytes[2] == b'/'
            && bytes[5] == b'/'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
    }

    #[test]
    fn test_zero_pads_month_and_day() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_date(&date), "03/07/2024");
    }

    #[test]
    fn test_two_digit_fields_are_not_padded_further() {
        let date = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(&date), "12/31/1999");
    }

    #[test]
    fn test_uses_value_time_zone() {
        // 23:30 UTC on Jan 31 is already Feb 1 at UTC+2
        let utc = Utc.with_ymd_and_hms(2025, 1, 31, 23, 30, 0).unwrap();
        let plus_two = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(format_date(&utc), "01/31/2025");
        assert_eq!(format_date(&plus_two), "02/01/2025");
    }

    #[test]
    fn test_components_match_calendar_fields() {
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        for step in 0..400 {
            let value = start + Duration::hours(step * 37);
            let formatted = format_date(&value);
            assert!(is_mm_dd_yyyy(&formatted), "{}", formatted);

            let parts: Vec<u32> = formatted.split('/').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts[0], value.month());
            assert_eq!(parts[1], value.day());
            assert_eq!(parts[2] as i32, value.year());
        }
    }

    #[test]
    fn test_today_is_well_formed() {
        assert!(is_mm_dd_yyyy(&today()));
    }
}
