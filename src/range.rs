use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CanonicalDate, DateError, DateInput, DateNormalizer, RANGE_SEPARATOR, prelude::*};

/// A closed period of dates such as a contract term or a report window.
/// Never empty: `start <= end` is checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CanonicalDate,
    end:   CanonicalDate,
}

/// Why a period could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Period starts {start}, after it ends {end}")]
    InvalidRange { start: CanonicalDate, end: CanonicalDate },

    /// An ISO bound was not a valid date
    #[error(transparent)]
    DateError(#[from] DateError),

    /// A raw cell used as a bound did not parse.
    #[error("Unparseable range bound: \"{0}\"")]
    UnparseableBound(String),

    #[error("Malformed period: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// # Errors
    /// Returns `RangeError::InvalidRange` when `start` falls after `end`.
    pub fn new(start: CanonicalDate, end: CanonicalDate) -> Result<Self, RangeError> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(RangeError::InvalidRange { start, end })
        }
    }

    /// Builds a range from two raw cells, e.g. the bounds of a dashboard filter.
    ///
    /// # Errors
    /// Returns `RangeError::UnparseableBound` naming the first bound that does
    /// not parse, or `RangeError::InvalidRange` if start > end.
    pub fn from_inputs(
        normalizer: &DateNormalizer,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
    ) -> Result<Self, RangeError> {
        let bound = |input: DateInput| {
            normalizer
                .parse_date(&input)
                .ok_or_else(|| RangeError::UnparseableBound(input.to_string()))
        };
        let start = bound(start.into())?;
        let end = bound(end.into())?;
        Self::new(start, end)
    }

    pub const fn start(&self) -> CanonicalDate {
        self.start
    }

    pub const fn end(&self) -> CanonicalDate {
        self.end
    }

    /// Both ends count as inside.
    pub fn contains(&self, date: &CanonicalDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// True when the two periods share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True when every day of `self` also lies in `other`.
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }
}

/// Keeps the rows whose date cell parses and falls inside `range`.
pub fn filter_by_date_range<'a, T, F, I>(
    normalizer: &DateNormalizer,
    rows: &'a [T],
    range: &DateRange,
    key: F,
) -> Vec<&'a T>
where
    F: Fn(&T) -> I,
    I: Into<DateInput>,
{
    rows.iter()
        .filter(|row| {
            normalizer
                .parse_date(key(*row))
                .is_some_and(|date| range.contains(&date))
        })
        .collect()
}

/// ISO 8601 interval form: `YYYY-MM-DD/YYYY-MM-DD`.
impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| RangeError::InvalidFormat(format!("expected START{RANGE_SEPARATOR}END, got {s:?}")))?;
        if end.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "more than one '{RANGE_SEPARATOR}' in {s:?}"
            )));
        }

        Self::new(start.trim().parse()?, end.trim().parse()?)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: u16, month: u8, day: u8) -> CanonicalDate {
        CanonicalDate::from_ymd(year, month, day).unwrap()
    }

    fn range(start: CanonicalDate, end: CanonicalDate) -> DateRange {
        DateRange::new(start, end).expect("failed to construct range")
    }

    #[test]
    fn test_new_rejects_backwards_period() {
        let term_start = ymd(2024, 10, 1);
        let term_end = ymd(2025, 9, 30);

        assert!(DateRange::new(term_start, term_end).is_ok());
        assert!(DateRange::new(term_start, term_start).is_ok());
        assert_eq!(
            DateRange::new(term_end, term_start),
            Err(RangeError::InvalidRange {
                start: term_end,
                end:   term_start,
            })
        );
        assert_eq!(
            RangeError::InvalidRange {
                start: term_end,
                end:   term_start,
            }
            .to_string(),
            "Period starts 2025-09-30, after it ends 2024-10-01"
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let year = range(ymd(2024, 1, 1), ymd(2024, 12, 31));

        assert!(year.contains(&ymd(2024, 1, 1)));
        assert!(year.contains(&ymd(2024, 12, 31)));
        assert!(year.contains(&ymd(2024, 7, 4)));
        assert!(!year.contains(&ymd(2023, 12, 31)));
        assert!(!year.contains(&ymd(2025, 1, 1)));
    }

    #[test]
    fn test_overlaps_and_within() {
        let first_half = range(ymd(2024, 1, 1), ymd(2024, 6, 30));
        let second_half = range(ymd(2024, 7, 1), ymd(2024, 12, 31));
        let summer = range(ymd(2024, 6, 1), ymd(2024, 8, 31));
        let june = range(ymd(2024, 6, 1), ymd(2024, 6, 30));

        assert!(!first_half.overlaps(&second_half));
        assert!(summer.overlaps(&first_half));
        assert!(summer.overlaps(&second_half));
        assert!(june.is_within(&first_half));
        assert!(!summer.is_within(&first_half));
    }

    #[test]
    fn test_len_days() {
        assert_eq!(range(ymd(2024, 1, 1), ymd(2024, 12, 31)).len_days(), 366);
        assert_eq!(range(ymd(2024, 3, 15), ymd(2024, 3, 15)).len_days(), 1);
    }

    #[test]
    fn test_from_inputs() {
        let normalizer = DateNormalizer::default();
        let parsed = DateRange::from_inputs(&normalizer, "01/01/2024", 45657.0).unwrap();
        assert_eq!(parsed, range(ymd(2024, 1, 1), ymd(2024, 12, 31)));

        let err = DateRange::from_inputs(&normalizer, "soon", "2024-12-31").unwrap_err();
        assert_eq!(err, RangeError::UnparseableBound("soon".to_owned()));

        let err = DateRange::from_inputs(&normalizer, "2025-01-01", "2024-12-31").unwrap_err();
        assert!(matches!(err, RangeError::InvalidRange { .. }));
    }

    #[test]
    fn test_filter_by_date_range() {
        struct Contract {
            id:         u32,
            award_date: &'static str,
        }

        let rows = [
            Contract {
                id:         1,
                award_date: "03/15/2024",
            },
            Contract {
                id:         2,
                award_date: "N/A",
            },
            Contract {
                id:         3,
                award_date: "2023-11-30",
            },
            Contract {
                id:         4,
                award_date: "12/31/2024",
            },
        ];

        let normalizer = DateNormalizer::default();
        let year = range(ymd(2024, 1, 1), ymd(2024, 12, 31));
        let kept: Vec<u32> = filter_by_date_range(&normalizer, &rows, &year, |row| row.award_date)
            .into_iter()
            .map(|row| row.id)
            .collect();
        assert_eq!(kept, vec![1, 4]);
    }

    #[test]
    fn test_iso_interval_round_trip() {
        let year = range(ymd(2024, 1, 1), ymd(2024, 12, 31));
        assert_eq!(year.to_string(), "2024-01-01/2024-12-31");
        assert_eq!("2024-01-01/2024-12-31".parse::<DateRange>(), Ok(year));

        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, r#""2024-01-01/2024-12-31""#);
        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, year);
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "2024-01-01".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-01/2024-06-01/2024-12-31".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-01/2024-02-30".parse::<DateRange>(),
            Err(RangeError::DateError(DateError::InvalidDay { .. }))
        ));
        assert!(matches!(
            "2024-12-31/2024-01-01".parse::<DateRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
    }
}
