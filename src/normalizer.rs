use crate::{ConfigError, NormalizerConfig};

/// The date normalization engine.
///
/// Holds only a [`NormalizerConfig`]; every operation is a pure function of
/// its arguments, the config and (for the clock-dependent ones) today's date.
/// The crate-level free functions call the same operations on
/// `DateNormalizer::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateNormalizer {
    config: NormalizerConfig,
}

impl DateNormalizer {
    /// # Errors
    /// Returns the first config field that fails validation.
    pub fn new(config: NormalizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }
}
