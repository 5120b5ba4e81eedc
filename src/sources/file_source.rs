use encoding_rs::SHIFT_JIS;
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{ProcessingError, Result};
use crate::sources::SourceProvider;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;

/// Reads a sounding table from a local file. JODC tables are ASCII data
/// lines, but headers and comments can be Shift_JIS, so decoding tries UTF-8
/// first and falls back to Shift_JIS.
pub struct FileSource {
    path: PathBuf,
    identifier: String,
    use_mmap: bool,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let identifier = path.to_string_lossy().into_owned();
        Self {
            path,
            identifier,
            use_mmap: false,
        }
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        let file = File::open(&self.path).map_err(|e| {
            ProcessingError::SourceUnavailable(format!("{}: {}", self.identifier, e))
        })?;

        if self.use_mmap {
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| {
                ProcessingError::SourceUnavailable(format!("{}: {}", self.identifier, e))
            })?;
            Ok(mmap.to_vec())
        } else {
            let mut buf = Vec::with_capacity(DEFAULT_BUFFER_SIZE);
            let mut file = file;
            file.read_to_end(&mut buf).map_err(|e| {
                ProcessingError::SourceUnavailable(format!("{}: {}", self.identifier, e))
            })?;
            Ok(buf)
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Ok(text.to_string());
        }

        let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
        if had_errors {
            return Err(ProcessingError::InvalidFormat(format!(
                "{} is neither UTF-8 nor Shift_JIS text",
                self.identifier
            )));
        }
        Ok(text.into_owned())
    }
}

impl SourceProvider for FileSource {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn fetch(&self) -> Result<String> {
        let bytes = self.read_bytes()?;
        let text = self.decode(&bytes)?;

        if text.is_empty() {
            return Err(ProcessingError::EmptySource(self.identifier.clone()));
        }

        Ok(text)
    }
}
