/// Error type for month conversions and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Label is not one of `JAN` through `DEC`.
    #[error("Unknown month label: {0:?} (expected JAN-DEC)")]
    UnknownMonth(String),

    /// Month number outside `1..=12` where rollover is not allowed.
    #[error("Invalid month: {0} (must be 1-12)")]
    MonthOutOfRange(u8),
}
