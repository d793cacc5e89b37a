//! Quantities derived from dates: day counts, deadline flags, fiscal years.
//!
//! Every operation accepts raw cells and treats a cell that does not parse
//! as "no answer": `0` for counts, `false` for flags, `None` for years.
//! `is_approaching` is the exception: it is defined over the day count, so an
//! unparseable cell (`0` days remaining) is approaching.
//! Operations that depend on the clock have an `_on` form taking `today`.

use crate::{CanonicalDate, DateInput, DateNormalizer, JANUARY};

impl DateNormalizer {
    /// Whole days from `a` to `b`, positive when `b` is later.
    pub fn days_between(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> i64 {
        match (self.parse_date(a), self.parse_date(b)) {
            (Some(a), Some(b)) => a.days_until(b),
            _ => 0,
        }
    }

    pub fn days_remaining(&self, end: impl Into<DateInput>) -> i64 {
        self.days_remaining_on(end, CanonicalDate::today())
    }

    pub fn days_remaining_on(&self, end: impl Into<DateInput>, today: CanonicalDate) -> i64 {
        self.days_between(today, end)
    }

    /// Inclusive on both ends. `false` if any of the three cells does not parse.
    pub fn is_date_in_range(
        &self,
        date: impl Into<DateInput>,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
    ) -> bool {
        match (self.parse_date(date), self.parse_date(start), self.parse_date(end)) {
            (Some(date), Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    pub fn is_overdue(&self, date: impl Into<DateInput>) -> bool {
        self.is_overdue_on(date, CanonicalDate::today())
    }

    /// A date is overdue once the end of its day has started: any day up to
    /// and including `today`.
    pub fn is_overdue_on(&self, date: impl Into<DateInput>, today: CanonicalDate) -> bool {
        self.parse_date(date).is_some_and(|date| date <= today)
    }

    /// [`DateNormalizer::is_approaching_on`] with today's date and the
    /// configured threshold.
    pub fn is_approaching(&self, date: impl Into<DateInput>) -> bool {
        self.is_approaching_within(date, self.config().approaching_threshold_days)
    }

    pub fn is_approaching_within(&self, date: impl Into<DateInput>, threshold_days: i64) -> bool {
        self.is_approaching_on(date, threshold_days, CanonicalDate::today())
    }

    /// `0 <= days remaining <= threshold_days`. An unparseable cell has `0`
    /// days remaining, so it counts as approaching for any non-negative
    /// threshold.
    pub fn is_approaching_on(
        &self,
        date: impl Into<DateInput>,
        threshold_days: i64,
        today: CanonicalDate,
    ) -> bool {
        (0..=threshold_days).contains(&self.days_remaining_on(date, today))
    }

    /// Calendar year, rolled forward for months from the configured fiscal
    /// start month through December.
    pub fn fiscal_year(&self, date: impl Into<DateInput>) -> Option<i32> {
        let date = self.parse_date(date)?;
        let start_month = u32::from(self.config().fiscal_year_start_month);
        let rolls_forward = start_month > u32::from(JANUARY) && date.month() >= start_month;
        Some(if rolls_forward { date.year() + 1 } else { date.year() })
    }
}

/// [`DateNormalizer::days_between`] with the default configuration.
pub fn days_between(a: impl Into<DateInput>, b: impl Into<DateInput>) -> i64 {
    DateNormalizer::default().days_between(a, b)
}

/// Days from today until `end`.
pub fn days_remaining(end: impl Into<DateInput>) -> i64 {
    DateNormalizer::default().days_remaining(end)
}

pub fn is_date_in_range(
    date: impl Into<DateInput>,
    start: impl Into<DateInput>,
    end: impl Into<DateInput>,
) -> bool {
    DateNormalizer::default().is_date_in_range(date, start, end)
}

pub fn is_overdue(date: impl Into<DateInput>) -> bool {
    DateNormalizer::default().is_overdue(date)
}

/// Whether `date` falls within the next `threshold_days` days, today included.
/// The usual threshold is [`DEFAULT_APPROACHING_DAYS`](crate::DEFAULT_APPROACHING_DAYS).
pub fn is_approaching(date: impl Into<DateInput>, threshold_days: i64) -> bool {
    DateNormalizer::default().is_approaching_within(date, threshold_days)
}

/// Fiscal year with an October 1 start.
pub fn fiscal_year(date: impl Into<DateInput>) -> Option<i32> {
    DateNormalizer::default().fiscal_year(date)
}
