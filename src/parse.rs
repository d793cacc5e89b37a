//! Text and cell parsing.
//!
//! Text is tried against [`PATTERNS`] in order. A pattern that matches the
//! shape of the input but yields an impossible date (month 13, February 30)
//! is skipped and the next one is tried. Only when every pattern has been
//! exhausted does parsing fall back to the free-form formats in
//! [`FALLBACK_DATE_FORMATS`] and friends.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, ParseResult};
use tracing::{debug, warn};

use crate::{
    CanonicalDate, DateInput, DateNormalizer, HYPHEN_SEPARATOR, NULL_TOKENS, SLASH_SEPARATOR,
    date::{is_ascii_digits, parse_u8, parse_u16},
    serial::parse_excel_serial,
};

/// Field order of a numeric date pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    MonthDayYear,
    YearMonthDay,
}

/// One entry of the priority table: a shape to match and how to read it.
#[derive(Debug, Clone, Copy)]
struct DatePattern {
    name: &'static str,
    order: FieldOrder,
    /// Exact digit count of the year field
    year_width: usize,
}

/// Numeric patterns in priority order. Month-first wins over any other
/// reading of the same digits.
const PATTERNS: [DatePattern; 3] = [
    DatePattern {
        name: "MM/DD/YYYY",
        order: FieldOrder::MonthDayYear,
        year_width: 4,
    },
    DatePattern {
        name: "YYYY/MM/DD",
        order: FieldOrder::YearMonthDay,
        year_width: 4,
    },
    DatePattern {
        name: "MM/DD/YY",
        order: FieldOrder::MonthDayYear,
        year_width: 2,
    },
];

/// Widths accepted for month and day fields
const MIN_FIELD_WIDTH: usize = 1;
const MAX_FIELD_WIDTH: usize = 2;

const CENTURY_1900: u16 = 1900;
const CENTURY_2000: u16 = 2000;

/// Zoned timestamps keep the wall-clock date they were written with.
const FALLBACK_ZONED_PARSERS: [fn(&str) -> ParseResult<DateTime<FixedOffset>>; 2] = [
    DateTime::<FixedOffset>::parse_from_rfc3339,
    DateTime::<FixedOffset>::parse_from_rfc2822,
];

const FALLBACK_DATETIME_FORMATS: [&str; 10] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const FALLBACK_DATE_FORMATS: [&str; 6] = [
    "%B %d, %Y",
    "%B %d %Y",
    "%A, %B %d, %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%Y.%m.%d",
];

impl DatePattern {
    /// Reads `(year, month, day)` out of `text` if it has this pattern's shape.
    /// Two-digit years are expanded around `pivot`. No calendar checks here.
    fn extract(&self, text: &str, pivot: u16) -> Option<(u16, u8, u8)> {
        let separator = single_separator(text)?;
        let parts: Vec<&str> = text.split(separator).collect();
        let [first, second, third] = parts.as_slice() else {
            return None;
        };

        let (year, month, day) = match self.order {
            FieldOrder::MonthDayYear => (*third, *first, *second),
            FieldOrder::YearMonthDay => (*first, *second, *third),
        };

        let field = |part: &str| (MIN_FIELD_WIDTH..=MAX_FIELD_WIDTH).contains(&part.len()) && is_ascii_digits(part);
        if year.len() != self.year_width || !is_ascii_digits(year) || !field(month) || !field(day) {
            return None;
        }

        let mut year = parse_u16(year).ok()?;
        if self.year_width == 2 {
            year = expand_two_digit_year(year, pivot);
        }

        Some((year, parse_u8(month).ok()?, parse_u8(day).ok()?))
    }
}

/// The one separator used throughout `text`. Mixed separators never match.
fn single_separator(text: &str) -> Option<char> {
    match (text.contains(SLASH_SEPARATOR), text.contains(HYPHEN_SEPARATOR)) {
        (true, false) => Some(SLASH_SEPARATOR),
        (false, true) => Some(HYPHEN_SEPARATOR),
        _ => None,
    }
}

/// `yy <= pivot` lands in the 2000s, anything above in the 1900s.
pub const fn expand_two_digit_year(year: u16, pivot: u16) -> u16 {
    if year <= pivot {
        CENTURY_2000 + year
    } else {
        CENTURY_1900 + year
    }
}

/// True for the tokens that mean "no date supplied".
fn is_null_token(text: &str) -> bool {
    text.is_empty() || NULL_TOKENS.iter().any(|token| text.eq_ignore_ascii_case(token))
}

/// Narrows a free-form parse result to the accepted year window.
fn within_bounds(date: NaiveDate) -> Option<CanonicalDate> {
    let year = u16::try_from(date.year()).ok()?;
    let month = u8::try_from(date.month()).ok()?;
    let day = u8::try_from(date.day()).ok()?;
    CanonicalDate::from_ymd(year, month, day).ok()
}

fn parse_fallback(text: &str) -> Option<CanonicalDate> {
    let zoned = FALLBACK_ZONED_PARSERS
        .iter()
        .find_map(|parse| parse(text).ok())
        .map(|stamp| stamp.naive_local().date());
    let naive = || {
        FALLBACK_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|stamp| stamp.date())
    };
    let date_only = || {
        FALLBACK_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    };

    zoned.or_else(naive).or_else(date_only).and_then(within_bounds)
}

fn parse_text(raw: &str, pivot: u16) -> Option<CanonicalDate> {
    let text = raw.trim();
    if is_null_token(text) {
        return None;
    }

    for pattern in &PATTERNS {
        let Some((year, month, day)) = pattern.extract(text, pivot) else {
            continue;
        };
        match CanonicalDate::from_ymd(year, month, day) {
            Ok(date) => return Some(date),
            Err(err) => debug!(input = text, pattern = pattern.name, %err, "date pattern matched with invalid components"),
        }
    }

    let parsed = parse_fallback(text);
    if parsed.is_none() {
        warn!(input = raw, "unable to parse date");
    }
    parsed
}

impl DateNormalizer {
    /// Normalizes any cell value into a date, or `None` when the cell is
    /// empty, a null token, or unparseable. Never panics.
    pub fn parse_date(&self, input: impl Into<DateInput>) -> Option<CanonicalDate> {
        match input.into() {
            DateInput::Absent => None,
            DateInput::Text(text) => parse_text(&text, self.config().two_digit_year_pivot),
            DateInput::Serial(serial) => parse_excel_serial(serial),
            DateInput::Date(date) => Some(CanonicalDate::from(date)),
            DateInput::DateTime(stamp) => Some(CanonicalDate::from(stamp.date())),
        }
    }
}

/// [`DateNormalizer::parse_date`] with the default configuration.
pub fn parse_date(input: impl Into<DateInput>) -> Option<CanonicalDate> {
    DateNormalizer::default().parse_date(input)
}

/// Whether `(year, month, day)` names a real date in `MIN_YEAR..=MAX_YEAR`.
pub fn is_valid_date_components(year: u16, month: u8, day: u8) -> bool {
    CanonicalDate::from_ymd(year, month, day).is_ok()
}
