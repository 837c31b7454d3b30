//! Date helpers for the schedule window and display formatting.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Number of columns in the availability grid.
pub const WINDOW_DAYS: i64 = 7;

/// Today's calendar date in the browser's local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The 7 consecutive calendar dates starting at `anchor`.
pub fn week_window(anchor: NaiveDate) -> Vec<NaiveDate> {
    (0..WINDOW_DAYS).map(|d| anchor + Duration::days(d)).collect()
}

/// Move the window anchor by whole weeks (negative shifts back).
pub fn shift_anchor(anchor: NaiveDate, weeks: i64) -> NaiveDate {
    anchor + Duration::days(weeks * WINDOW_DAYS)
}

pub fn weekday_cn(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "周一",
        Weekday::Tue => "周二",
        Weekday::Wed => "周三",
        Weekday::Thu => "周四",
        Weekday::Fri => "周五",
        Weekday::Sat => "周六",
        Weekday::Sun => "周日",
    }
}

/// Column header of the grid, e.g. "06-01 周日".
pub fn format_grid_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%m-%d"), weekday_cn(date))
}

/// Full date for detail views, e.g. "2025年06月01日".
pub fn format_date_cn(date: NaiveDate) -> String {
    format!("{}年{:02}月{:02}日", date.year(), date.month(), date.day())
}

/// Timestamps arrive as ISO strings; show "YYYY-MM-DD HH:MM".
pub fn format_timestamp(ts: &str) -> String {
    let cleaned = ts.replace('T', " ");
    let trimmed = cleaned.split('.').next().unwrap_or(&cleaned);
    trimmed.chars().take(16).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_window_is_seven_consecutive_days() {
        let anchor = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let window = week_window(anchor);
        assert_eq!(window.len(), 7);
        for (i, day) in window.iter().enumerate() {
            assert_eq!(*day, anchor + Duration::days(i as i64));
        }
    }

    #[test]
    fn test_shift_anchor_by_week() {
        let anchor = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(
            shift_anchor(anchor, 1),
            NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()
        );
        assert_eq!(
            shift_anchor(anchor, -1),
            NaiveDate::from_ymd_opt(2025, 5, 25).unwrap()
        );
        // round trip
        assert_eq!(shift_anchor(shift_anchor(anchor, 3), -3), anchor);
    }

    #[test]
    fn test_format_grid_date() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(format_grid_date(d), "06-01 周日");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2025-06-01T14:02:26.123Z"),
            "2025-06-01 14:02"
        );
        assert_eq!(format_timestamp("2025-06-01 14:02:26"), "2025-06-01 14:02");
    }
}
