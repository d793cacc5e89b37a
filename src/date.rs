use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveTime};

use crate::{
    DateError, HYPHEN_SEPARATOR,
    prelude::*,
    types::DateParts,
};

/// A calendar day with no time-of-day or timezone attached.
///
/// Values built from components go through [`DateParts`] validation, so
/// they always fall in `MIN_YEAR..=MAX_YEAR`. Values wrapped from an existing
/// [`NaiveDate`] are real dates but may sit outside that window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, From, Into)]
#[display(fmt = "{_0}")]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Builds a date from raw components.
    ///
    /// # Errors
    /// Returns the first component that fails validation.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_parts(DateParts::new(year, month, day)?)
    }

    /// Builds a date from already validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if chrono disagrees about the date.
    pub fn from_parts(parts: DateParts) -> Result<Self, DateError> {
        let (year, month, day) = (parts.year().get(), parts.month().get(), parts.day().get());
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(DateError::InvalidDay { month, day, year })
    }

    /// Today's date on the local wall clock.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, January = 1
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month, starting at 1
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying chrono date
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Milliseconds since the Unix epoch at UTC midnight of this day.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

/// Strict ISO `YYYY-MM-DD`, the same shape `Display` produces.
impl FromStr for CanonicalDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(HYPHEN_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY-MM-DD, found {} {} separators",
                parts.len() - 1,
                HYPHEN_SEPARATOR
            )));
        };

        let shaped = |part: &str, width: usize| part.len() == width && is_ascii_digits(part);
        if !shaped(year, 4) || !shaped(month, 2) || !shaped(day, 2) {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        Self::from_ymd(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?)
    }
}

pub(crate) fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

pub(crate) fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CanonicalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CanonicalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
