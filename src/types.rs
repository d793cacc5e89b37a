//! Validated date components.
//!
//! A spreadsheet cell is only accepted once its year, month and day each pass
//! their own check, and the day is checked against the length of its month.

use std::{fmt, num::NonZeroU8};

use serde::Serialize;

use crate::{
    DateError, prelude::*,
    consts::{
        CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH,
        MAX_YEAR, MIN_YEAR,
    },
};

/// A year inside the accepted contract window, `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize)]
#[display(fmt = "{_0}")]
#[serde(into = "u16")]
pub struct Year(u16);

impl Year {
    /// # Errors
    /// Returns `DateError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }

    /// Returns the year as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether February has 29 days this year
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

/// A month number, January = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{_0}")]
#[serde(into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `DateError::InvalidMonth` for 0 or anything past December.
    pub fn new(value: u8) -> Result<Self, DateError> {
        NonZeroU8::new(value)
            .filter(|month| month.get() <= MAX_MONTH)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Returns the month number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days this month has in `year`.
    pub const fn length_in(self, year: Year) -> u8 {
        days_in_month(year.get(), self.get())
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day of the month, only constructible against a known year and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{_0}")]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `DateError::InvalidDay` for 0 or a day past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        NonZeroU8::new(value)
            .filter(|day| day.get() <= month.length_in(year))
            .map(Self)
            .ok_or(DateError::InvalidDay {
                month: month.get(),
                day: value,
                year: year.get(),
            })
    }

    /// Returns the day of the month as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

/// A year, month and day that together name a real calendar date in the
/// accepted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateParts {
    year:  Year,
    month: Month,
    day:   Day,
}

impl DateParts {
    /// Checks year, then month, then day, and reports the first failure.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year.get(), self.month.get(), self.day.get())
    }
}

/// Gregorian leap rule.
pub const fn is_leap_year(year: u16) -> bool {
    year % GREGORIAN_CYCLE == 0 || (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0)
}

/// Length of `month` in `year`. Months outside 1-12 have no days.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        FEBRUARY if is_leap_year(year) => FEBRUARY_DAYS_LEAP,
        1..=MAX_MONTH => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}
