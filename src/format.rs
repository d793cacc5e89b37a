use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CanonicalDate, DateInput, DateNormalizer, prelude::*};

/// Display style for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    /// `3/15/2024`, the en-US short locale form
    #[default]
    #[display(fmt = "short")]
    Short,
    /// `March 15, 2024`
    #[display(fmt = "long")]
    Long,
    /// `2024-03-15`
    #[display(fmt = "iso")]
    Iso,
    /// `03/15/2024`, zero-padded
    #[display(fmt = "custom")]
    Custom,
}

impl FormatMode {
    /// Looks a mode up by name. Unknown names fall back to [`FormatMode::Short`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "long" => Self::Long,
            "iso" => Self::Iso,
            "custom" => Self::Custom,
            _ => Self::Short,
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%-m/%-d/%Y",
            Self::Long => "%B %-d, %Y",
            Self::Iso => "%Y-%m-%d",
            Self::Custom => "%m/%d/%Y",
        }
    }
}

impl FromStr for FormatMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl CanonicalDate {
    pub fn formatted(&self, mode: FormatMode) -> String {
        self.as_naive().format(mode.pattern()).to_string()
    }
}

impl DateNormalizer {
    /// Formats any cell value. Cells that do not parse format as `""`.
    pub fn format_date(&self, input: impl Into<DateInput>, mode: FormatMode) -> String {
        self.parse_date(input)
            .map(|date| date.formatted(mode))
            .unwrap_or_default()
    }
}

/// [`DateNormalizer::format_date`] with the default configuration.
pub fn format_date(input: impl Into<DateInput>, mode: FormatMode) -> String {
    DateNormalizer::default().format_date(input, mode)
}
