use std::cmp::Ordering;

use crate::{DateInput, DateNormalizer};

/// Sort key for date columns: epoch milliseconds at UTC midnight.
/// Cells that do not parse sort as the epoch itself (`0`).
pub fn sort_key(input: impl Into<DateInput>) -> i64 {
    DateNormalizer::default().sort_key(input)
}

/// Comparator for date-valued columns, ascending.
pub fn compare_date_cells(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Ordering {
    DateNormalizer::default().compare_date_cells(a, b)
}

impl DateNormalizer {
    pub fn sort_key(&self, input: impl Into<DateInput>) -> i64 {
        self.parse_date(input)
            .map_or(0, |date| date.timestamp_millis())
    }

    pub fn compare_date_cells(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }
}
