use serde::Serialize;

use crate::{CanonicalDate, DateInput, DateNormalizer};

/// Outcome of validating one date cell for display in a report.
///
/// Either invalid with an `error`, or valid with a `date` and possibly an
/// advisory `warning`. Warnings never accompany invalid results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateValidation {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<CanonicalDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl DateValidation {
    fn invalid(error: String) -> Self {
        Self {
            is_valid: false,
            date: None,
            error: Some(error),
            warning: None,
        }
    }

    fn valid(date: CanonicalDate, warning: Option<String>) -> Self {
        Self {
            is_valid: true,
            date: Some(date),
            error: None,
            warning,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub const fn date(&self) -> Option<CanonicalDate> {
        self.date
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}

impl DateNormalizer {
    pub fn validate_date(&self, input: impl Into<DateInput>, field_name: &str) -> DateValidation {
        self.validate_date_on(input, field_name, CanonicalDate::today())
    }

    /// Validates a cell for the field `field_name`. Years before the
    /// configured minimum or too far past `today` pass with a warning.
    pub fn validate_date_on(
        &self,
        input: impl Into<DateInput>,
        field_name: &str,
        today: CanonicalDate,
    ) -> DateValidation {
        let input = input.into();
        if input.is_blank() {
            return DateValidation::invalid(format!("{field_name} is empty or null"));
        }

        let Some(date) = self.parse_date(&input) else {
            return DateValidation::invalid(format!("{field_name} could not be parsed: \"{input}\""));
        };

        let config = self.config();
        let latest_plausible = today.year().saturating_add(config.plausible_years_ahead);
        let warning = if date.year() < config.plausible_min_year {
            Some(format!(
                "{field_name} year {} is unusually old (before {})",
                date.year(),
                config.plausible_min_year
            ))
        } else if date.year() > latest_plausible {
            Some(format!(
                "{field_name} year {} is unusually far in the future (after {latest_plausible})",
                date.year()
            ))
        } else {
            None
        };

        DateValidation::valid(date, warning)
    }
}

/// [`DateNormalizer::validate_date`] with the default configuration.
pub fn validate_date(input: impl Into<DateInput>, field_name: &str) -> DateValidation {
    DateNormalizer::default().validate_date(input, field_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CanonicalDate {
        CanonicalDate::from_ymd(2024, 6, 1).unwrap()
    }

    fn validate(input: impl Into<DateInput>, field_name: &str) -> DateValidation {
        DateNormalizer::default().validate_date_on(input, field_name, today())
    }

    #[test]
    fn test_absent_is_invalid() {
        let result = validate(DateInput::Absent, "award date");
        assert!(!result.is_valid());
        assert_eq!(result.date(), None);
        assert_eq!(result.warning(), None);
        let error = result.error().unwrap();
        assert!(error.contains("award date"));
        assert!(error.contains("empty or null"));

        assert_eq!(validate("  ", "award date"), result);
        assert_eq!(validate(None::<&str>, "award date"), result);
    }

    #[test]
    fn test_unparseable_includes_raw_input() {
        let result = validate("13/45/2024", "x");
        assert!(!result.is_valid());
        assert_eq!(result.warning(), None);
        let error = result.error().unwrap();
        assert!(error.contains("could not be parsed"));
        assert!(error.contains("13/45/2024"));
    }

    #[test]
    fn test_valid_without_warning() {
        let result = validate("03/15/2024", "end date");
        assert!(result.is_valid());
        assert_eq!(result.date(), CanonicalDate::from_ymd(2024, 3, 15).ok());
        assert_eq!(result.error(), None);
        assert_eq!(result.warning(), None);
    }

    #[test]
    fn test_plausibility_warnings() {
        struct TestCase {
            input: &'static str,
            warning_fragment: Option<&'static str>,
        }

        let cases = [
            TestCase {
                input: "12/31/1989",
                warning_fragment: Some("unusually old"),
            },
            TestCase {
                input: "01/01/1990",
                warning_fragment: None,
            },
            TestCase {
                input: "12/31/2034",
                warning_fragment: None,
            },
            TestCase {
                input: "01/01/2035",
                warning_fragment: Some("far in the future"),
            },
        ];

        for case in &cases {
            let result = validate(case.input, "start date");
            assert!(result.is_valid(), "{} should be valid", case.input);
            assert_eq!(result.error(), None);
            match case.warning_fragment {
                Some(fragment) => {
                    let warning = result.warning().unwrap();
                    assert!(warning.contains(fragment), "{}: {warning}", case.input);
                    assert!(warning.contains("start date"));
                }
                None => assert_eq!(result.warning(), None, "{}", case.input),
            }
        }
    }

    #[test]
    fn test_serial_zero_is_a_date_not_empty() {
        let result = validate(0.0, "award date");
        assert!(result.is_valid());
        assert!(result.warning().is_some());
    }

    #[test]
    fn test_serializes_for_reporting() {
        let invalid = serde_json::to_value(validate(DateInput::Absent, "award date")).unwrap();
        assert_eq!(
            invalid,
            serde_json::json!({"isValid": false, "error": "award date is empty or null"})
        );

        let valid = serde_json::to_value(validate("2024-03-15", "award date")).unwrap();
        assert_eq!(valid, serde_json::json!({"isValid": true, "date": "2024-03-15"}));
    }

    #[test]
    fn test_widest_look_ahead_never_warns_about_the_future() {
        let config = crate::NormalizerConfig {
            plausible_years_ahead: 200,
            ..crate::NormalizerConfig::default()
        };
        let normalizer = DateNormalizer::new(config).unwrap();
        let result = normalizer.validate_date_on("12/31/2100", "end date", today());
        assert!(result.is_valid());
        assert_eq!(result.warning(), None);

        let unbounded = crate::NormalizerConfig {
            plausible_years_ahead: i32::MAX,
            ..crate::NormalizerConfig::default()
        };
        assert!(DateNormalizer::new(unbounded).is_err());
    }

    #[test]
    fn test_free_function_uses_current_year() {
        assert!(validate_date(CanonicalDate::today(), "today").warning().is_none());
    }
}
