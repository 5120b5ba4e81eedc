pub mod bounds;
pub mod geojson;
pub mod request;
pub mod sounding;

pub use bounds::MinuteBounds;
pub use geojson::{Feature, FeatureCollection, FeatureProperties, Geometry};
pub use request::{ConversionOutput, ConversionRequest, OutputKind};
pub use sounding::{DecimalSounding, SexagesimalSounding};
