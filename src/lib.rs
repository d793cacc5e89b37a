//! Date normalization for spreadsheet-sourced contract records.
//!
//! Cells arrive as text in several conventions, as spreadsheet serial numbers,
//! or as native dates. Everything funnels through [`parse_date`] into a
//! [`CanonicalDate`]; the other operations (formatting, day counts, deadline
//! flags, fiscal years, validation, range filtering and sorting) are built on
//! top of it.
//!
//! None of the public operations fail or panic. A cell that cannot be read
//! yields `None`, `0`, `false` or `""` and a `tracing` warning.
//!
//! ```
//! use contract_dates::{FormatMode, days_between, fiscal_year, format_date, parse_date};
//!
//! let date = parse_date("03/15/2024").unwrap();
//! assert_eq!(date.to_string(), "2024-03-15");
//! assert_eq!(format_date(45366.0, FormatMode::Long), "March 15, 2024");
//! assert_eq!(days_between("2024-01-01", "01/31/2024"), 30);
//! assert_eq!(fiscal_year("10/01/2024"), Some(2025));
//! ```

mod calc;
mod config;
mod consts;
mod date;
mod format;
mod input;
mod normalizer;
mod ordering;
mod parse;
mod prelude;
mod range;
mod serial;
mod types;
mod validate;

pub use calc::{days_between, days_remaining, fiscal_year, is_approaching, is_date_in_range, is_overdue};
pub use config::{ConfigError, NormalizerConfig};
pub use consts::*;
pub use date::CanonicalDate;
pub use format::{FormatMode, format_date};
pub use input::DateInput;
pub use normalizer::DateNormalizer;
pub use ordering::{compare_date_cells, sort_key};
pub use parse::{expand_two_digit_year, is_valid_date_components, parse_date};
pub use range::{DateRange, RangeError, filter_by_date_range};
pub use serial::parse_excel_serial;
pub use types::{DateParts, Day, Month, Year, days_in_month, is_leap_year};
pub use validate::{DateValidation, validate_date};

/// Error building a date from components or strict ISO text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[error("Empty date string")]
    EmptyInput,
}
