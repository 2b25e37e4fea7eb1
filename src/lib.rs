//! Calendar helpers and the habit record model for habit-tracking apps.
//!
//! [`days_in_month`] lists the day numbers of any month, rolling
//! out-of-range month numbers over into neighbouring years. [`Month`] is the
//! symbolic month stored on [`Habit`] records, and [`COLOR_PALETTE`] holds
//! the fixed colors a habit can be shown in.
//!
//! ```
//! use habit_calendar::{Habit, Month, days_in_month};
//!
//! let mut habit = Habit::new("h-1", "Read");
//! for day in Month::Feb.days_in(2024) {
//!     if day % 7 == 0 {
//!         habit.toggle_day(Month::Feb, day);
//!     }
//! }
//! assert_eq!(habit.days_for(Month::Feb), &[7, 14, 21, 28]);
//! assert_eq!(days_in_month(14, 2023).len(), 29);
//! ```

mod calendar;
mod consts;
mod error;
mod habit;
mod month;
mod prelude;

pub use calendar::{DaySequence, YearMonth, days_in_month, is_leap_year, month_length};
pub use consts::*;
pub use error::CalendarError;
pub use habit::{Habit, HabitId, MonthDays};
pub use month::Month;
