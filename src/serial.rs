//! Spreadsheet serial-date conversion.
//!
//! Spreadsheet engines count days from 1900-01-01 as day 1 and, for
//! compatibility with an old bug, also count a 1900-02-29 that never existed.
//! Both offsets are removed together: day `n` maps to `1900-01-01 + (n - 2)`.

use chrono::{NaiveDate, TimeDelta};
use tracing::debug;

use crate::{CanonicalDate, EXCEL_EPOCH, EXCEL_SERIAL_CORRECTION};

/// Converts a spreadsheet serial day number into a date.
///
/// The fractional part (time of day) is dropped by flooring, so `45000.75`
/// lands on the same day as `45000`. Returns `None` for NaN, infinities, and
/// serials whose date chrono cannot represent.
pub fn parse_excel_serial(serial: f64) -> Option<CanonicalDate> {
    if !serial.is_finite() {
        debug!(serial, "serial date is not a finite number");
        return None;
    }

    let (year, month, day) = EXCEL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day)?;

    // Saturating float-to-int cast; anything that large fails try_days below.
    #[allow(clippy::cast_possible_truncation)]
    let offset_days = (serial - EXCEL_SERIAL_CORRECTION).floor() as i64;

    let converted = TimeDelta::try_days(offset_days).and_then(|delta| epoch.checked_add_signed(delta));
    if converted.is_none() {
        debug!(serial, "serial date is out of representable range");
    }
    converted.map(CanonicalDate::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> CanonicalDate {
        CanonicalDate::from(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn test_serial_conversion_cases() {
        struct TestCase {
            serial: f64,
            expected: CanonicalDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                serial: 1.0,
                expected: ymd(1899, 12, 31),
                description: "day one shifts back by the two-day correction",
            },
            TestCase {
                serial: 2.0,
                expected: ymd(1900, 1, 1),
                description: "epoch anchor",
            },
            TestCase {
                serial: 60.0,
                expected: ymd(1900, 2, 28),
                description: "phantom leap day is never produced",
            },
            TestCase {
                serial: 61.0,
                expected: ymd(1900, 3, 1),
                description: "first day after the phantom leap day",
            },
            TestCase {
                serial: 36526.0,
                expected: ymd(2000, 1, 1),
                description: "turn of the century",
            },
            TestCase {
                serial: 45000.0,
                expected: ymd(2023, 3, 15),
                description: "modern date",
            },
            TestCase {
                serial: 45366.0,
                expected: ymd(2024, 3, 15),
                description: "leap year date",
            },
            TestCase {
                serial: 45366.99,
                expected: ymd(2024, 3, 15),
                description: "time of day is dropped",
            },
            TestCase {
                serial: 0.0,
                expected: ymd(1899, 12, 30),
                description: "zero serial",
            },
            TestCase {
                serial: -0.5,
                expected: ymd(1899, 12, 29),
                description: "negative fractions floor toward the past",
            },
        ];

        for case in &cases {
            assert_eq!(
                parse_excel_serial(case.serial),
                Some(case.expected),
                "serial {} ({})",
                case.serial,
                case.description
            );
        }
    }

    #[test]
    fn test_non_finite_serials() {
        assert_eq!(parse_excel_serial(f64::NAN), None);
        assert_eq!(parse_excel_serial(f64::INFINITY), None);
        assert_eq!(parse_excel_serial(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_unrepresentable_serials() {
        assert_eq!(parse_excel_serial(1e12), None);
        assert_eq!(parse_excel_serial(-1e12), None);
        assert_eq!(parse_excel_serial(f64::MAX), None);
    }
}
