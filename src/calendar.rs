use std::fmt;

use serde::Serialize;

use crate::{
    Month,
    consts::{
        CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, FIRST_DAY,
        GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_PER_YEAR,
    },
    prelude::*,
};

/// Returns the day numbers `1..=N` of the given month, where `N` is the
/// month's length in that year.
///
/// Any `month` is accepted: values outside `1..=12` roll over into the
/// adjacent years, so `days_in_month(13, 2023)` is January 2024 and
/// `days_in_month(0, 2024)` is December 2023.
///
/// # Example
///
/// ```
/// use habit_calendar::days_in_month;
///
/// let february = days_in_month(2, 2024);
/// assert_eq!(february.len(), 29);
/// assert_eq!(february.first(), Some(&1));
/// assert_eq!(days_in_month(13, 2023), days_in_month(1, 2024));
/// ```
pub fn days_in_month(month: i32, year: i32) -> DaySequence {
    YearMonth::from_rollover(month, year).days()
}

/// Proleptic Gregorian leap-year rule, valid for zero and negative years.
pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
pub const fn month_length(year: i64, month: Month) -> u8 {
    let number = month.number();
    if number == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[number as usize]
    }
}

/// A calendar month pinned to a year.
/// Ordered chronologically (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i64,
    month: Month,
}

impl YearMonth {
    /// Creates a year-month from an already-valid month
    pub fn new(year: i32, month: Month) -> Self {
        Self {
            year: i64::from(year),
            month,
        }
    }

    /// Normalizes a possibly out-of-range month number the way calendar
    /// date constructors do: month 0 is December of the previous year,
    /// month 13 is January of the next, and so on in both directions.
    pub fn from_rollover(month: i32, year: i32) -> Self {
        let months_per_year = i64::from(MONTHS_PER_YEAR);
        let index = i64::from(year) * months_per_year + i64::from(month) - 1;

        // rem_euclid keeps the offset in 0..12
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let offset = index.rem_euclid(months_per_year) as usize;
        let normalized = Self {
            year: index.div_euclid(months_per_year),
            month: Month::ALL[offset],
        };

        if !(1..=i32::from(MONTHS_PER_YEAR)).contains(&month) {
            log::trace!("month {month} of year {year} rolled over to {normalized}");
        }
        normalized
    }

    /// Returns the year
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The following month, crossing into the next year after December
    pub const fn next(&self) -> Self {
        match self.month {
            Month::Dec => Self {
                year: self.year + 1,
                month: Month::Jan,
            },
            month => Self {
                year: self.year,
                month: month.succ(),
            },
        }
    }

    /// The preceding month, crossing into the previous year before January
    pub const fn previous(&self) -> Self {
        match self.month {
            Month::Jan => Self {
                year: self.year - 1,
                month: Month::Dec,
            },
            month => Self {
                year: self.year,
                month: month.pred(),
            },
        }
    }

    /// Day-of-month of the last day, found by stepping back one day from
    /// the first day of the following month.
    pub fn last_day(&self) -> u8 {
        let (month, day) = previous_day(self.next(), FIRST_DAY);
        debug_assert_eq!(month, *self);
        day
    }

    /// All day numbers of this month, in order
    pub fn days(&self) -> DaySequence {
        DaySequence::through(self.last_day())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            f.write_str("-")?;
        }
        write!(f, "{:04}{DATE_SEPARATOR}{:02}", self.year.unsigned_abs(), self.month.number())
    }
}

fn previous_day(month: YearMonth, day: u8) -> (YearMonth, u8) {
    if day > FIRST_DAY {
        (month, day - 1)
    } else {
        let previous = month.previous();
        (previous, month_length(previous.year, previous.month))
    }
}

/// Ordered day numbers of one month: starts at 1, strictly increasing,
/// no gaps, 28 to 31 entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Into, Serialize)]
#[serde(transparent)]
pub struct DaySequence(Vec<u8>);

impl DaySequence {
    fn through(last_day: u8) -> Self {
        Self((FIRST_DAY..=last_day).collect())
    }

    /// The final day number, which is also the month's length
    pub fn last_day(&self) -> u8 {
        self.0.last().copied().unwrap_or_default()
    }

    /// Borrows the day numbers as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl IntoIterator for DaySequence {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DaySequence {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
