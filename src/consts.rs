/// Minimum accepted year for parsed dates (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Maximum accepted year for parsed dates (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Highest month number (December)
pub const MAX_MONTH: u8 = 12;
/// Month number for January; a fiscal year starting here matches the calendar year
pub const JANUARY: u8 = 1;
/// Month number for February, the only month whose length depends on the year
pub const FEBRUARY: u8 = 2;
/// Default first month of the fiscal year
pub const OCTOBER: u8 = 10;

/// February length in leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Month lengths in a common year, January first
pub const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Gregorian leap rule: every 4th year, except centuries not divisible by 400
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Slash separator (`03/15/2024`, `2024/03/15`)
pub const SLASH_SEPARATOR: char = '/';
/// Hyphen separator (`03-15-2024`, `2024-03-15`)
pub const HYPHEN_SEPARATOR: char = '-';
/// Separator between the two ends of a serialized range (ISO 8601 interval)
pub const RANGE_SEPARATOR: char = '/';

/// Two-digit years at or below this value land in the 2000s, above it in the 1900s
pub const TWO_DIGIT_YEAR_PIVOT: u16 = 30;

/// Spreadsheet serial epoch: serial day 1 is 1900-01-01
pub const EXCEL_EPOCH: (i32, u32, u32) = (1900, 1, 1);
/// One day for the one-based serial count, one for the phantom 1900-02-29
pub const EXCEL_SERIAL_CORRECTION: f64 = 2.0;

/// Default window, in days, for `is_approaching`
pub const DEFAULT_APPROACHING_DAYS: i64 = 30;

/// Years before this produce a validation warning
pub const PLAUSIBLE_MIN_YEAR: i32 = 1990;
/// Years more than this far past the current year produce a validation warning
pub const PLAUSIBLE_YEARS_AHEAD: i32 = 10;

/// Text tokens meaning "no date supplied" (compared case-insensitively)
pub const NULL_TOKENS: [&str; 1] = ["n/a"];

