use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::coordinates::to_dms;

/// A depth sounding with coordinates in decimal degrees, as parsed from a
/// 500m mesh table line. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DecimalSounding {
    pub type_code: i32,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    pub depth: i32,
}

impl DecimalSounding {
    pub fn new(type_code: i32, longitude: f64, latitude: f64, depth: i32) -> Self {
        Self {
            type_code,
            longitude,
            latitude,
            depth,
        }
    }

    /// Derive the sexagesimal twin of this sounding. Longitude and latitude
    /// are decomposed independently; type code and depth carry over unchanged.
    pub fn to_sexagesimal(&self) -> SexagesimalSounding {
        let (lon_deg, lon_min, lon_sec) = to_dms(self.longitude);
        let (lat_deg, lat_min, lat_sec) = to_dms(self.latitude);

        SexagesimalSounding {
            type_code: self.type_code,
            lon_deg,
            lon_min,
            lon_sec,
            lat_deg,
            lat_min,
            lat_sec,
            depth: self.depth,
        }
    }
}

/// A depth sounding with each coordinate split into degrees, minutes and
/// seconds (seconds held to 3-decimal precision).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SexagesimalSounding {
    pub type_code: i32,
    pub lon_deg: i32,
    pub lon_min: u8,
    pub lon_sec: f64,
    pub lat_deg: i32,
    pub lat_min: u8,
    pub lat_sec: f64,
    pub depth: i32,
}
