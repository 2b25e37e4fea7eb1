/// Number of months in a calendar year
pub const MONTHS_PER_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const FIRST_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Year-month separator used by `YearMonth`'s display form
pub const DATE_SEPARATOR: char = '-';

/// Background colors offered for habits, in display order.
/// `#F0FFFF` (azure) is listed twice; the order is what the picker shows.
pub const COLOR_PALETTE: [&str; 17] = [
    "#F0FFFF", "#E0FFFF", "#F1DDCF", "#FFF0F5", "#FFDAE9", "#FFE4E1", "#F0FFF0", "#F0F8FF",
    "#E6E6FA", "#FAE6FA", "#E5E4E2", "#F2F3F4", "#FAEBD7", "#F0FFFF", "#F8F4FF", "#F5FFFA",
    "#FFF5EE",
];

/// Returns the habit color palette.
pub const fn color_palette() -> &'static [&'static str] {
    &COLOR_PALETTE
}
