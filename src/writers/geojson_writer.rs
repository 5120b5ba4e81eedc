use crate::error::Result;
use crate::models::{DecimalSounding, Feature, FeatureCollection, FeatureProperties};

/// Projects decimal soundings into a GeoJSON FeatureCollection.
///
/// The marker color encodes depth on the green channel: the shallowest
/// sounding renders `#00ffff` and the deepest `#0000ff`, so deeper points
/// read as more blue. Red and blue are fixed.
pub struct GeoJsonWriter;

impl GeoJsonWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn project(&self, records: &[DecimalSounding]) -> FeatureCollection {
        if records.is_empty() {
            return FeatureCollection::new(Vec::new());
        }

        let mut depth_min = i32::MAX;
        let mut depth_max = i32::MIN;
        for record in records {
            depth_min = depth_min.min(record.depth);
            depth_max = depth_max.max(record.depth);
        }

        // A uniform-depth set would make the scale divide by zero
        let depth_range = if depth_max == depth_min {
            1
        } else {
            depth_max - depth_min
        };

        let features = records
            .iter()
            .map(|record| {
                let fraction = (record.depth - depth_min) as f64 / depth_range as f64;
                let green = 255 - (fraction * 255.0).round() as i64;

                Feature::point(
                    record.longitude,
                    record.latitude,
                    FeatureProperties {
                        name: record.depth.to_string(),
                        marker_color: format!("#00{:02x}ff", green),
                        marker_size: "medium".to_string(),
                        marker_symbol: String::new(),
                    },
                )
            })
            .collect();

        FeatureCollection::new(features)
    }

    /// Pretty-printed JSON document (two-space indent), the form handed to
    /// the packaging collaborator.
    pub fn to_pretty_json(&self, collection: &FeatureCollection) -> Result<String> {
        Ok(serde_json::to_string_pretty(collection)?)
    }
}

impl Default for GeoJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record_is_full_green() {
        // depth == depthMin == depthMax forces depthRange = 1 and a 255
        // green channel
        let records = vec![DecimalSounding::new(1, 139.5, 35.5, 100)];
        let collection = GeoJsonWriter::new().project(&records);

        assert_eq!(collection.features.len(), 1);
        let feature = &collection.features[0];
        assert_eq!(feature.properties.marker_color, "#00ffff");
        assert_eq!(feature.properties.name, "100");
        assert_eq!(feature.geometry.coordinates, [139.5, 35.5]);
    }

    #[test]
    fn test_depth_extremes_map_to_color_extremes() {
        let records = vec![
            DecimalSounding::new(1, 139.5, 35.5, 0),
            DecimalSounding::new(1, 139.6, 35.6, 100),
        ];
        let collection = GeoJsonWriter::new().project(&records);

        assert_eq!(collection.features[0].properties.marker_color, "#00ffff");
        assert_eq!(collection.features[1].properties.marker_color, "#0000ff");
    }

    #[test]
    fn test_midpoint_depth_color() {
        let records = vec![
            DecimalSounding::new(1, 139.5, 35.5, 100),
            DecimalSounding::new(1, 139.6, 35.6, 150),
            DecimalSounding::new(1, 139.7, 35.7, 200),
        ];
        let collection = GeoJsonWriter::new().project(&records);

        // (150-100)/100 * 255 = 127.5, rounds to 128; 255-128 = 127 = 0x7f
        assert_eq!(collection.features[1].properties.marker_color, "#007fff");
    }

    #[test]
    fn test_uniform_depth_set() {
        let records = vec![
            DecimalSounding::new(1, 139.5, 35.5, 42),
            DecimalSounding::new(1, 139.6, 35.6, 42),
        ];
        let collection = GeoJsonWriter::new().project(&records);

        for feature in &collection.features {
            assert_eq!(feature.properties.marker_color, "#00ffff");
        }
    }

    #[test]
    fn test_feature_order_matches_input_order() {
        let records: Vec<DecimalSounding> = (0..10)
            .map(|i| DecimalSounding::new(1, 139.5, 35.5, i * 17))
            .collect();
        let collection = GeoJsonWriter::new().project(&records);

        let names: Vec<String> = collection
            .features
            .iter()
            .map(|f| f.properties.name.clone())
            .collect();
        let expected: Vec<String> = (0..10).map(|i| (i * 17).to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_empty_input_projects_empty_collection() {
        let collection = GeoJsonWriter::new().project(&[]);
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_pretty_json_shape() {
        let writer = GeoJsonWriter::new();
        let collection = writer.project(&[DecimalSounding::new(1, 139.5, 35.5, 100)]);
        let json = writer.to_pretty_json(&collection).unwrap();

        assert!(json.contains("\"type\": \"FeatureCollection\""));
        assert!(json.contains("\"marker-color\": \"#00ffff\""));
        assert!(json.contains("\n  "));
    }
}
