//! Month grid layout for the events calendar.
//!
//! A grid is a run of blank leading cells (one per weekday before the 1st,
//! Sunday first) followed by one cell per day of the month.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, NaiveDate};

/// Days of the month that carry a scheduled activity when none are configured.
pub const DEFAULT_ACTIVITY_DAYS: [u32; 6] = [15, 18, 22, 25, 28, 30];

/// One rendered calendar cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarCell {
    /// Placeholder before the first weekday of the month.
    Empty,
    Day { day: u32, has_activity: bool },
}

impl CalendarCell {
    /// CSS class list for the cell element.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Empty => "calendar-day empty",
            Self::Day { has_activity: true, .. } => "calendar-day has-event",
            Self::Day { has_activity: false, .. } => "calendar-day",
        }
    }

    #[must_use]
    pub fn day(self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Day { day, .. } => Some(day),
        }
    }
}

/// Shape of one month: weekday offset of the 1st and number of days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub leading_blanks: u32,
    pub days: u32,
}

impl MonthGrid {
    #[must_use]
    pub fn new(leading_blanks: u32, days: u32) -> Self {
        Self { leading_blanks, days }
    }

    /// Grid for the month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let leading_blanks = first.weekday().num_days_from_sunday();
        Self { leading_blanks, days: days_in_month(first.year(), first.month()) }
    }

    /// Blank cells followed by day cells, marking `activity_days`.
    #[must_use]
    pub fn cells(&self, activity_days: &[u32]) -> Vec<CalendarCell> {
        let blanks = (0..self.leading_blanks).map(|_| CalendarCell::Empty);
        let days = (1..=self.days).map(|day| CalendarCell::Day { day, has_activity: activity_days.contains(&day) });
        blanks.chain(days).collect()
    }
}

/// Number of days in `month` (1-12) of `year`; 0 for an invalid month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map_or(0, |n| u32::try_from(n.signed_duration_since(first).num_days()).unwrap_or(0))
}
