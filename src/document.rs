//! Document sources: files on disk or text already in memory.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::DocumentError;

/// Files above this size are rejected unless configured otherwise.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// How many leading bytes are checked for NUL when sniffing binaries.
const BINARY_SNIFF_LEN: usize = 512;

/// Where a document's raw text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Memory { id: String, text: String },
}

impl DocumentSource {
    pub fn memory(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Memory {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Stable identifier: the path as given, or the in-memory id.
    pub fn id(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Memory { id, .. } => id.clone(),
        }
    }

    /// Read the raw text. Files larger than `max_bytes`, binary files and
    /// non-UTF-8 files are rejected; a leading byte-order mark is dropped.
    pub fn load(&self, max_bytes: u64) -> Result<String, DocumentError> {
        match self {
            Self::File(path) => read_source_file(path, max_bytes),
            Self::Memory { text, .. } => Ok(text.clone()),
        }
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

fn read_source_file(path: &Path, max_bytes: u64) -> Result<String, DocumentError> {
    let io_err = |source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();
    if size > max_bytes {
        return Err(DocumentError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_bytes,
        });
    }

    if is_binary_reader(&mut file).map_err(io_err)? {
        return Err(DocumentError::Binary(path.to_path_buf()));
    }

    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    file.read_to_end(&mut bytes).map_err(io_err)?;

    let text =
        String::from_utf8(bytes).map_err(|_| DocumentError::InvalidUtf8(path.to_path_buf()))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Check the first bytes of `reader` for NUL, then rewind it to the start.
pub fn is_binary_reader<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut header = [0u8; BINARY_SNIFF_LEN];
    let n = reader.read(&mut header)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(looks_binary(&header[..n]))
}

/// A NUL byte near the start of the content marks it as binary.
pub fn looks_binary(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(BINARY_SNIFF_LEN)].contains(&0)
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
