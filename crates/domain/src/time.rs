//! Time and date formatting helpers.

use chrono::{Datelike, NaiveDateTime};

/// Format a local timestamp the way the greeting card shows it,
/// e.g. `Friday, October 16th 2026, 3:04:05 pm`.
#[must_use]
pub fn format_long_datetime(at: NaiveDateTime) -> String {
    let day = at.day();
    format!(
        "{}, {} {}{} {}, {}",
        at.format("%A"),
        at.format("%B"),
        day,
        ordinal_suffix(day),
        at.year(),
        at.format("%-I:%M:%S %P"),
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn should_format_afternoon_with_ordinal_day() {
        assert_eq!(
            format_long_datetime(at(2026, 10, 16, 15, 4, 5)),
            "Friday, October 16th 2026, 3:04:05 pm"
        );
    }

    #[test]
    fn should_format_morning_hours_without_padding() {
        assert_eq!(
            format_long_datetime(at(2026, 3, 1, 9, 30, 0)),
            "Sunday, March 1st 2026, 9:30:00 am"
        );
    }

    #[test]
    fn should_use_th_for_teens() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn should_render_midnight_as_twelve_am() {
        assert_eq!(
            format_long_datetime(at(2026, 1, 2, 0, 0, 7)),
            "Friday, January 2nd 2026, 12:00:07 am"
        );
    }
}
