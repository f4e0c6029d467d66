use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::error::GateError;
use crate::source::decode::{Decoded, decode};

/// File suffix of the scanned language. Compared case-sensitively.
pub const SOURCE_EXTENSION: &str = "py";

/// A source file loaded for one evaluation.
///
/// Owned by the run for the duration of a single `evaluate` call and
/// dropped afterwards.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as supplied by the caller (informational only).
    pub path: String,

    /// Size of the file in bytes.
    pub size_bytes: u64,

    /// Hex-encoded SHA-256 of the exact bytes read.
    pub sha256: String,

    /// Decoded text or the decode-failure marker.
    pub content: Decoded,
}

/// Whether `path` should be evaluated at all.
///
/// Missing paths and paths without the `.py` suffix are skipped, never failed.
pub fn is_target(path: &Path) -> bool {
    path.exists() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// Read a source file, fingerprint it and decode it.
///
/// Decoding problems are folded into `SourceFile::content`; only I/O errors
/// are returned.
pub fn read_source(path: &Path) -> Result<SourceFile, GateError> {
    let bytes = fs::read(path).map_err(|source| GateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();

    Ok(SourceFile {
        path: path.display().to_string(),
        size_bytes: bytes.len() as u64,
        sha256: hex::encode(digest),
        content: decode(bytes),
    })
}
