pub mod geojson_writer;
pub mod text_writer;

pub use geojson_writer::GeoJsonWriter;
pub use text_writer::SexagesimalTextWriter;
