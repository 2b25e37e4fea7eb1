use serde::{Deserialize, Serialize};

use crate::{Month, prelude::*};

/// Opaque habit identifier.
///
/// Textual ids are canonical. Older records stored a numeric id; those are
/// still accepted when deserializing and are converted to their decimal
/// text, so a record always serializes back with a string id.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(from = "StoredHabitId", into = "String")]
pub struct HabitId(String);

impl HabitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HabitId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<u64> for HabitId {
    fn from(legacy: u64) -> Self {
        Self(legacy.to_string())
    }
}

/// Either id form found in stored habit records.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredHabitId {
    Text(String),
    Legacy(u64),
}

impl From<StoredHabitId> for HabitId {
    fn from(stored: StoredHabitId) -> Self {
        match stored {
            StoredHabitId::Text(id) => Self(id),
            StoredHabitId::Legacy(id) => {
                log::debug!("migrating legacy numeric habit id {id} to text");
                Self::from(id)
            }
        }
    }
}

/// Days marked for one month of a habit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthDays {
    pub month: Month,
    pub days: Vec<u8>,
}

impl MonthDays {
    pub const fn new(month: Month) -> Self {
        Self {
            month,
            days: Vec::new(),
        }
    }
}

/// A tracked habit and the days it was completed, grouped by month.
/// Records are taken as stored; day numbers are not checked against the
/// month's length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub dates: Vec<MonthDays>,
}

impl Habit {
    /// Creates a habit with no marked days
    pub fn new(id: impl Into<HabitId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dates: Vec::new(),
        }
    }

    /// Marked days of `month`, from the first entry for that month
    pub fn days_for(&self, month: Month) -> &[u8] {
        self.dates
            .iter()
            .find(|entry| entry.month == month)
            .map(|entry| entry.days.as_slice())
            .unwrap_or_default()
    }

    /// Checks whether `day` of `month` is marked
    pub fn is_marked(&self, month: Month, day: u8) -> bool {
        self.days_for(month).contains(&day)
    }

    /// Marks `day` if unmarked, unmarks it otherwise.
    /// Returns whether the day is marked afterwards.
    pub fn toggle_day(&mut self, month: Month, day: u8) -> bool {
        let index = if let Some(index) = self.dates.iter().position(|entry| entry.month == month) {
            index
        } else {
            self.dates.push(MonthDays::new(month));
            self.dates.len() - 1
        };
        let days = &mut self.dates[index].days;

        if let Some(position) = days.iter().position(|&marked| marked == day) {
            days.remove(position);
            false
        } else {
            let insert_at = days.partition_point(|&marked| marked < day);
            days.insert(insert_at, day);
            true
        }
    }

    /// Total marked days across all months
    pub fn marked_count(&self) -> usize {
        self.dates.iter().map(|entry| entry.days.len()).sum()
    }
}
