use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::SexagesimalSounding;

/// Rectangular inclusion test over the minutes component of longitude and
/// latitude. Each side is optional; an absent side imposes no constraint.
///
/// Only the minutes field of a sexagesimal sounding is compared — degrees and
/// seconds are ignored. This matches the search semantics of the 500m mesh
/// tables, where a single mesh file spans one degree cell and minute bounds
/// are enough to cut a sub-rectangle out of it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate,
)]
pub struct MinuteBounds {
    #[validate(range(max = 59))]
    pub lon_from: Option<u8>,

    #[validate(range(max = 59))]
    pub lon_to: Option<u8>,

    #[validate(range(max = 59))]
    pub lat_from: Option<u8>,

    #[validate(range(max = 59))]
    pub lat_to: Option<u8>,
}

impl MinuteBounds {
    pub fn new(
        lon_from: Option<u8>,
        lon_to: Option<u8>,
        lat_from: Option<u8>,
        lat_to: Option<u8>,
    ) -> Self {
        Self {
            lon_from,
            lon_to,
            lat_from,
            lat_to,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.lon_from.is_none()
            && self.lon_to.is_none()
            && self.lat_from.is_none()
            && self.lat_to.is_none()
    }

    /// Inclusive containment check against the minute fields of a sounding.
    pub fn matches(&self, sounding: &SexagesimalSounding) -> bool {
        if let Some(min) = self.lon_from {
            if sounding.lon_min < min {
                return false;
            }
        }
        if let Some(max) = self.lon_to {
            if sounding.lon_min > max {
                return false;
            }
        }
        if let Some(min) = self.lat_from {
            if sounding.lat_min < min {
                return false;
            }
        }
        if let Some(max) = self.lat_to {
            if sounding.lat_min > max {
                return false;
            }
        }
        true
    }

    /// Reject bounds where a lower side exceeds its upper side. This is a
    /// caller input error and is checked before a request is dispatched.
    pub fn ensure_ordered(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (self.lon_from, self.lon_to) {
            if from > to {
                return Err(ProcessingError::InvalidBounds(format!(
                    "longitude minutes {} exceed upper bound {}",
                    from, to
                )));
            }
        }
        if let (Some(from), Some(to)) = (self.lat_from, self.lat_to) {
            if from > to {
                return Err(ProcessingError::InvalidBounds(format!(
                    "latitude minutes {} exceed upper bound {}",
                    from, to
                )));
            }
        }
        Ok(())
    }
}
