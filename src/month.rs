use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarError, DaySequence, consts::MONTHS_PER_YEAR, days_in_month};

/// Month of the year as stored on habit records.
/// Displays and serializes as its three-letter label (`JAN` .. `DEC`);
/// `number()` maps it onto the calendar's 1-based month numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Month {
    Jan = 1,
    Feb = 2,
    Mar = 3,
    Apr = 4,
    May = 5,
    Jun = 6,
    Jul = 7,
    Aug = 8,
    Sep = 9,
    Oct = 10,
    Nov = 11,
    Dec = 12,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Creates a Month from its 1-based number (1 = January)
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` if the value is 0 or > 12.
    pub fn from_number(value: u8) -> Result<Self, CalendarError> {
        if value == 0 || value > MONTHS_PER_YEAR {
            return Err(CalendarError::MonthOutOfRange(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the 1-based month number
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the three-letter uppercase label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jan => "JAN",
            Self::Feb => "FEB",
            Self::Mar => "MAR",
            Self::Apr => "APR",
            Self::May => "MAY",
            Self::Jun => "JUN",
            Self::Jul => "JUL",
            Self::Aug => "AUG",
            Self::Sep => "SEP",
            Self::Oct => "OCT",
            Self::Nov => "NOV",
            Self::Dec => "DEC",
        }
    }

    /// Following month, December wraps to January
    pub const fn succ(self) -> Self {
        Self::ALL[(self.number() % MONTHS_PER_YEAR) as usize]
    }

    /// Preceding month, January wraps to December
    pub const fn pred(self) -> Self {
        Self::ALL[((self.number() + MONTHS_PER_YEAR - 2) % MONTHS_PER_YEAR) as usize]
    }

    /// Day numbers of this month in the given year.
    pub fn days_in(self, year: i32) -> DaySequence {
        days_in_month(i32::from(self.number()), year)
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalendarError::UnknownMonth(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_mapping_cases() {
        struct TestCase {
            month: Month,
            number: u8,
            label: &'static str,
        }

        let cases = [
            TestCase {
                month: Month::Jan,
                number: 1,
                label: "JAN",
            },
            TestCase {
                month: Month::Feb,
                number: 2,
                label: "FEB",
            },
            TestCase {
                month: Month::Jun,
                number: 6,
                label: "JUN",
            },
            TestCase {
                month: Month::Sep,
                number: 9,
                label: "SEP",
            },
            TestCase {
                month: Month::Dec,
                number: 12,
                label: "DEC",
            },
        ];

        for case in &cases {
            assert_eq!(case.month.number(), case.number, "{} number", case.label);
            assert_eq!(case.month.label(), case.label);
            assert_eq!(case.month.to_string(), case.label);
            assert_eq!(Month::from_number(case.number), Ok(case.month));
        }
    }

    #[test]
    fn test_all_is_in_calendar_order() {
        for (index, month) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.number()), index + 1);
        }
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert_eq!(Month::from_number(0), Err(CalendarError::MonthOutOfRange(0)));
        assert_eq!(Month::from_number(13), Err(CalendarError::MonthOutOfRange(13)));

        let result: Result<Month, _> = 255.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_into_u8() {
        let value: u8 = Month::Aug.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("JAN".parse::<Month>(), Ok(Month::Jan));
        assert_eq!("dec".parse::<Month>(), Ok(Month::Dec));
        assert_eq!(" Mar ".parse::<Month>(), Ok(Month::Mar));
    }

    #[test]
    fn test_parse_unknown_label() {
        let result = "January".parse::<Month>();
        assert_eq!(result, Err(CalendarError::UnknownMonth("January".to_owned())));
        assert!("".parse::<Month>().is_err());
    }

    #[test]
    fn test_succ_and_pred_wrap() {
        assert_eq!(Month::Dec.succ(), Month::Jan);
        assert_eq!(Month::Jan.pred(), Month::Dec);
        assert_eq!(Month::Feb.succ(), Month::Mar);
        assert_eq!(Month::Mar.pred(), Month::Feb);
        for month in Month::ALL {
            assert_eq!(month.succ().pred(), month);
        }
    }

    #[test]
    fn test_days_in_matches_numeric_calendar() {
        for month in Month::ALL {
            assert_eq!(month.days_in(2024), days_in_month(i32::from(month.number()), 2024));
        }
        assert_eq!(Month::Feb.days_in(2024).len(), 29);
        assert_eq!(Month::Feb.days_in(2023).len(), 28);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Month::Sep).expect("failed to serialize month");
        assert_eq!(json, r#""SEP""#);

        let parsed: Month =
            serde_json::from_str(r#""NOV""#).expect("failed to deserialize month label");
        assert_eq!(parsed, Month::Nov);

        assert!(serde_json::from_str::<Month>(r#""nov""#).is_err());
    }
}
