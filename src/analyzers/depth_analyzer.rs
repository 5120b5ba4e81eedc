use crate::error::{ProcessingError, Result};
use crate::models::DecimalSounding;

#[derive(Debug)]
pub struct DepthStatistics {
    pub total_records: usize,
    pub depth_min: i32,
    pub depth_max: i32,
    pub depth_mean: f64,
    pub geographic_bounds: GeographicBounds,
}

#[derive(Debug)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl DepthStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Sounding Table Statistics:\n  Records: {}\n  Depth: {} to {} m (mean {:.1} m)\n  Latitude: {:.4} to {:.4}\n  Longitude: {:.4} to {:.4}",
            self.total_records,
            self.depth_min,
            self.depth_max,
            self.depth_mean,
            self.geographic_bounds.min_lat,
            self.geographic_bounds.max_lat,
            self.geographic_bounds.min_lon,
            self.geographic_bounds.max_lon,
        )
    }
}

/// Computes summary statistics over a parsed sounding table.
pub struct DepthAnalyzer;

impl DepthAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, records: &[DecimalSounding]) -> Result<DepthStatistics> {
        if records.is_empty() {
            return Err(ProcessingError::Config(
                "No records to analyze".to_string(),
            ));
        }

        let mut depth_min = i32::MAX;
        let mut depth_max = i32::MIN;
        let mut depth_sum = 0.0f64;
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;

        for record in records {
            depth_min = depth_min.min(record.depth);
            depth_max = depth_max.max(record.depth);
            depth_sum += record.depth as f64;
            min_lat = min_lat.min(record.latitude);
            max_lat = max_lat.max(record.latitude);
            min_lon = min_lon.min(record.longitude);
            max_lon = max_lon.max(record.longitude);
        }

        Ok(DepthStatistics {
            total_records: records.len(),
            depth_min,
            depth_max,
            depth_mean: depth_sum / records.len() as f64,
            geographic_bounds: GeographicBounds {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            },
        })
    }
}

impl Default for DepthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_statistics() {
        let records = vec![
            DecimalSounding::new(1, 139.5, 35.5, 100),
            DecimalSounding::new(1, 139.75, 35.25, 300),
            DecimalSounding::new(1, 139.25, 35.75, 200),
        ];

        let stats = DepthAnalyzer::new().analyze(&records).unwrap();

        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.depth_min, 100);
        assert_eq!(stats.depth_max, 300);
        assert_eq!(stats.depth_mean, 200.0);
        assert_eq!(stats.geographic_bounds.min_lat, 35.25);
        assert_eq!(stats.geographic_bounds.max_lon, 139.75);
    }

    #[test]
    fn test_analyze_empty_table_is_an_error() {
        assert!(DepthAnalyzer::new().analyze(&[]).is_err());
    }

    #[test]
    fn test_summary_text() {
        let records = vec![DecimalSounding::new(1, 139.5, 35.5, 100)];
        let summary = DepthAnalyzer::new().analyze(&records).unwrap().summary();

        assert!(summary.contains("Records: 1"));
        assert!(summary.contains("100 to 100 m"));
    }
}
