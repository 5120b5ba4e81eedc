pub mod minute_filter;
pub mod pipeline;

pub use minute_filter::MinuteFilter;
pub use pipeline::{DepthPipeline, PipelineStage};
