use serde::{Deserialize, Serialize};

use crate::models::MinuteBounds;

/// The output shape a conversion request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputKind {
    /// Decimal-degree passthrough of the source text.
    DecimalPassthrough,
    /// Sexagesimal degree/minute/second text rendering.
    SexagesimalText,
    /// Sexagesimal text filtered by minute bounds.
    SexagesimalSearch,
    /// GeoJSON FeatureCollection with depth-derived marker colors.
    GeoJson,
}

impl OutputKind {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "base10" => Some(OutputKind::DecimalPassthrough),
            "base60" => Some(OutputKind::SexagesimalText),
            "search60" => Some(OutputKind::SexagesimalSearch),
            "geojson" => Some(OutputKind::GeoJson),
            _ => None,
        }
    }

    /// Filename suffix appended to the mesh basename.
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputKind::DecimalPassthrough => "base10",
            OutputKind::SexagesimalText => "base60",
            OutputKind::SexagesimalSearch => "search60",
            OutputKind::GeoJson => "geojson",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputKind::GeoJson => "geojson",
            _ => "txt",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OutputKind::DecimalPassthrough => "Decimal passthrough",
            OutputKind::SexagesimalText => "Sexagesimal text",
            OutputKind::SexagesimalSearch => "Sexagesimal search",
            OutputKind::GeoJson => "GeoJSON",
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single conversion request against one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub kind: OutputKind,
    pub bounds: Option<MinuteBounds>,
}

impl ConversionRequest {
    pub fn new(kind: OutputKind) -> Self {
        Self { kind, bounds: None }
    }

    pub fn with_bounds(mut self, bounds: MinuteBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

/// Finished conversion: the payload and the filename the packaging
/// collaborator should give it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    pub payload: String,
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_round_trip() {
        for kind in [
            OutputKind::DecimalPassthrough,
            OutputKind::SexagesimalText,
            OutputKind::SexagesimalSearch,
            OutputKind::GeoJson,
        ] {
            assert_eq!(OutputKind::from_suffix(kind.suffix()), Some(kind));
        }
        assert_eq!(OutputKind::from_suffix("base16"), None);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputKind::SexagesimalText.extension(), "txt");
        assert_eq!(OutputKind::SexagesimalSearch.extension(), "txt");
        assert_eq!(OutputKind::DecimalPassthrough.extension(), "txt");
        assert_eq!(OutputKind::GeoJson.extension(), "geojson");
    }
}
