pub mod citation;
pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use citation::citation_line;
pub use coordinates::to_dms;
pub use filename::{extract_mesh_basename, output_filename};
pub use progress::{ConsoleProgress, NullProgress, ProgressSink};
