pub mod file_source;

pub use file_source::FileSource;

use crate::error::Result;

/// Supplies the raw sounding table for one source. Content retrieval and
/// container unpacking live behind this seam; the pipeline only sees the
/// decoded text.
///
/// `fetch` is blocking; the pipeline runs it on a blocking task so the
/// async caller is only suspended for the duration of the I/O wait.
pub trait SourceProvider: Send + Sync {
    /// Identifier the source is known by (URL, file path). Feeds the cache
    /// fingerprint and the output basename.
    fn identifier(&self) -> &str;

    /// Fetch and decode the table text.
    fn fetch(&self) -> Result<String>;
}
