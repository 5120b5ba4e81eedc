pub mod depth_analyzer;

pub use depth_analyzer::{DepthAnalyzer, DepthStatistics, GeographicBounds};
