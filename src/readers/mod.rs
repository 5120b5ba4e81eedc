pub mod sounding_reader;

pub use sounding_reader::{SoundingReader, SoundingTable};
