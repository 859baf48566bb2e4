//! Path canonicalization and name normalization utilities

use crate::error::ScanError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a root path (resolves symlinks, `..`, `.`) without the
/// Windows verbatim prefix.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, ScanError> {
    dunce::canonicalize(path).map_err(|e| {
        ScanError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e))
    })
}

/// Normalize an entry name to NFC so that names written with decomposed and
/// precomposed characters compare equal. `None` for names that are not valid
/// UTF-8, which cannot be represented without losing their identity.
pub fn normalize_name(name: &OsStr) -> Option<String> {
    name.to_str().map(|name| name.nfc().collect())
}

/// Display name for a tree root: its final component, or the whole path for
/// roots such as `/` that have none.
pub fn root_name(canonical_root: &Path) -> String {
    match canonical_root.file_name() {
        Some(name) => name.to_string_lossy().nfc().collect(),
        None => canonical_root.to_string_lossy().nfc().collect(),
    }
}
