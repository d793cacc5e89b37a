use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_APPROACHING_DAYS, MAX_MONTH, OCTOBER, PLAUSIBLE_MIN_YEAR, PLAUSIBLE_YEARS_AHEAD,
    TWO_DIGIT_YEAR_PIVOT,
};

/// Largest value a two-digit year can take
const MAX_TWO_DIGIT_YEAR: u16 = 99;
/// Span of the accepted year window (`MAX_YEAR - MIN_YEAR`); a look-ahead
/// wider than this can never trigger a warning
const MAX_YEARS_AHEAD: i32 = 200;

/// Tunable policy for a [`DateNormalizer`](crate::DateNormalizer).
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Two-digit years `<= pivot` expand to `2000 + yy`, larger ones to `1900 + yy`
    pub two_digit_year_pivot: u16,
    /// First month of the fiscal year; months from here to December roll forward
    pub fiscal_year_start_month: u8,
    /// Default window used by `is_approaching`
    pub approaching_threshold_days: i64,
    /// Dates before this year validate with a warning
    pub plausible_min_year: i32,
    /// Dates more than this many years past the current year validate with a warning
    pub plausible_years_ahead: i32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            two_digit_year_pivot: TWO_DIGIT_YEAR_PIVOT,
            fiscal_year_start_month: OCTOBER,
            approaching_threshold_days: DEFAULT_APPROACHING_DAYS,
            plausible_min_year: PLAUSIBLE_MIN_YEAR,
            plausible_years_ahead: PLAUSIBLE_YEARS_AHEAD,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid normalizer config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid two-digit year pivot: {0} (must be 0-{max})", max = MAX_TWO_DIGIT_YEAR)]
    InvalidPivot(u16),

    #[error("Invalid fiscal year start month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidFiscalStart(u8),

    #[error("Invalid approaching threshold: {0} days (must not be negative)")]
    InvalidThreshold(i64),

    #[error("Invalid plausible look-ahead: {0} years (must be 0-{max})", max = MAX_YEARS_AHEAD)]
    InvalidYearsAhead(i32),
}

impl NormalizerConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` on malformed JSON, or the first field that
    /// fails [`NormalizerConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.two_digit_year_pivot > MAX_TWO_DIGIT_YEAR {
            return Err(ConfigError::InvalidPivot(self.two_digit_year_pivot));
        }
        if self.fiscal_year_start_month == 0 || self.fiscal_year_start_month > MAX_MONTH {
            return Err(ConfigError::InvalidFiscalStart(self.fiscal_year_start_month));
        }
        if self.approaching_threshold_days < 0 {
            return Err(ConfigError::InvalidThreshold(self.approaching_threshold_days));
        }
        if !(0..=MAX_YEARS_AHEAD).contains(&self.plausible_years_ahead) {
            return Err(ConfigError::InvalidYearsAhead(self.plausible_years_ahead));
        }
        Ok(())
    }
}
