use crate::error::{ProcessingError, Result};
use crate::models::{MinuteBounds, SexagesimalSounding};

/// Selects sexagesimal soundings whose minute components fall inside a
/// `MinuteBounds` rectangle. The filter is stable: surviving records keep
/// their input order, and input records are never altered.
pub struct MinuteFilter {
    bounds: MinuteBounds,
}

impl MinuteFilter {
    pub fn new(bounds: MinuteBounds) -> Self {
        Self { bounds }
    }

    /// Apply the filter. An empty result is reported as `NoMatchingData` so
    /// the caller can say "no matching soundings" instead of emitting an
    /// empty file.
    pub fn apply(&self, records: &[SexagesimalSounding]) -> Result<Vec<SexagesimalSounding>> {
        let kept: Vec<SexagesimalSounding> = records
            .iter()
            .filter(|record| self.bounds.matches(record))
            .cloned()
            .collect();

        if kept.is_empty() {
            return Err(ProcessingError::NoMatchingData);
        }

        Ok(kept)
    }
}
