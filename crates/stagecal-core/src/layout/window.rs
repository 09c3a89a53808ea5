//! Visible time windows for layout.
//!
//! A window is an inclusive `[start, end]` range of instants. Layout only
//! ever looks at the calendar dates of the two bounds, so a window covering
//! Sunday 00:00 to Saturday 23:59:59 is seven day-columns wide.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Days between the week's first day and `date`.
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        let weekday = date.weekday();
        match self {
            Self::Sunday => weekday.num_days_from_sunday() as i64,
            Self::Monday => weekday.num_days_from_monday() as i64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("valid midnight")
}

/// Last whole second of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59).expect("valid end of day")
}

/// The visible range for one layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Window {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Window {
    /// Create a window from two instants.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidWindow`] if `end < start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, LayoutError> {
        if end < start {
            return Err(LayoutError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// A window covering the whole of `from` through the whole of `to`.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidWindow`] if `to` is before `from`.
    pub fn dates(from: NaiveDate, to: NaiveDate) -> Result<Self, LayoutError> {
        Self::new(start_of_day(from), end_of_day(to))
    }

    /// A single-day window.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: start_of_day(date),
            end: end_of_day(date),
        }
    }

    /// The seven-day week that contains `date`.
    pub fn week_containing(date: NaiveDate, week_start: WeekStart) -> Self {
        let first = date - Duration::days(week_start.offset_of(date));
        let last = first + Duration::days(6);
        Self {
            start: start_of_day(first),
            end: end_of_day(last),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    /// Number of day-columns in the window (always >= 1).
    pub fn day_count(&self) -> usize {
        (self.last_day() - self.first_day()).num_days() as usize + 1
    }

    pub fn contains_day(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Day-column index of `date`, if it falls inside the window.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        self.contains_day(date)
            .then(|| (date - self.first_day()).num_days() as usize)
    }

    /// Every date in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first_day();
        (0..self.day_count() as i64).map(move |offset| first + Duration::days(offset))
    }
}

/// The week rows of a month grid.
///
/// Rows start at the week containing the 1st and end at the week containing
/// the month's last day, so leading and trailing days of the neighbouring
/// months are included.
///
/// # Errors
/// Returns [`LayoutError::InvalidMonth`] if `month` is not 1..=12 or the
/// year is out of range.
pub fn month_rows(year: i32, month: u32, week_start: WeekStart) -> Result<Vec<Window>, LayoutError> {
    let invalid = || LayoutError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first - Duration::days(1);

    let mut rows = Vec::new();
    let mut week = Window::week_containing(first, week_start);
    loop {
        rows.push(week);
        if week.contains_day(last) {
            break;
        }
        week = Window::week_containing(week.last_day() + Duration::days(1), week_start);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_window_rejected() {
        let start = start_of_day(date(2026, 10, 12));
        let end = start - Duration::hours(1);
        assert_eq!(
            Window::new(start, end),
            Err(LayoutError::InvalidWindow { start, end })
        );
    }

    #[test]
    fn test_zero_length_window_is_one_day() {
        let at = start_of_day(date(2026, 10, 12)) + Duration::hours(9);
        let window = Window::new(at, at).unwrap();
        assert_eq!(window.day_count(), 1);
    }

    #[test]
    fn test_week_containing_sunday_start() {
        // 2026-10-15 is a Thursday
        let week = Window::week_containing(date(2026, 10, 15), WeekStart::Sunday);
        assert_eq!(week.first_day(), date(2026, 10, 11));
        assert_eq!(week.last_day(), date(2026, 10, 17));
        assert_eq!(week.day_count(), 7);
        assert_eq!(week.end(), end_of_day(date(2026, 10, 17)));
    }

    #[test]
    fn test_week_containing_monday_start() {
        let week = Window::week_containing(date(2026, 10, 11), WeekStart::Monday);
        assert_eq!(week.first_day(), date(2026, 10, 5));
        assert_eq!(week.last_day(), date(2026, 10, 11));
    }

    #[test]
    fn test_column_of() {
        let week = Window::week_containing(date(2026, 10, 15), WeekStart::Sunday);
        assert_eq!(week.column_of(date(2026, 10, 11)), Some(0));
        assert_eq!(week.column_of(date(2026, 10, 17)), Some(6));
        assert_eq!(week.column_of(date(2026, 10, 18)), None);
        assert_eq!(week.days().count(), 7);
    }

    #[test]
    fn test_month_rows_cover_month() {
        // October 2026 starts on a Thursday and ends on a Saturday
        let rows = month_rows(2026, 10, WeekStart::Sunday).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].first_day(), date(2026, 9, 27));
        assert_eq!(rows[4].last_day(), date(2026, 10, 31));
        for pair in rows.windows(2) {
            assert_eq!(pair[0].last_day() + Duration::days(1), pair[1].first_day());
        }
    }

    #[test]
    fn test_month_rows_december_rolls_year() {
        let rows = month_rows(2026, 12, WeekStart::Monday).unwrap();
        assert!(rows.last().unwrap().contains_day(date(2026, 12, 31)));
    }

    #[test]
    fn test_month_rows_invalid_month() {
        assert_eq!(
            month_rows(2026, 13, WeekStart::Sunday),
            Err(LayoutError::InvalidMonth { year: 2026, month: 13 })
        );
    }
}
