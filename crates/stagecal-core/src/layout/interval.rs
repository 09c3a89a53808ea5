//! The input side of the layout engine.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::window::{end_of_day, start_of_day};

/// Anything that occupies a date-ranged slot on a calendar.
///
/// The engine only reads these three fields; whatever else the implementor
/// carries is left untouched.
pub trait Interval {
    /// Stable identifier used to correlate output records.
    fn id(&self) -> &str;
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;
}

impl<T: Interval + ?Sized> Interval for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }
}

/// Simplified event representation for layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimelineEvent {
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// An all-day event covering `from` through `to`.
    pub fn all_day(id: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(id, start_of_day(from), end_of_day(to))
    }
}

impl Interval for TimelineEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}
