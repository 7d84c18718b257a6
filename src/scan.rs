//! Directory scanning.
//!
//! Lists exactly one directory (no recursion) and keeps the entries the
//! pipeline cares about: regular files whose extension is in the configured
//! image set. Everything else — subdirectories, hidden files, the manifest
//! file, stray sidecars — is skipped.
//!
//! The configured manifest filename is excluded by name, whatever its
//! extension, so a generated manifest can never classify as an image on a
//! later run. Hidden files are skipped unconditionally: the renamer stages
//! files under dot-prefixed temporary names, so leftovers from a crashed
//! run are invisible to the next scan instead of being misclassified as
//! candidates.

use crate::config::RenumberConfig;
use crate::naming::{self, FileEntry};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Scan `dir` for image files, returning entries in natural name order.
///
/// `config.extensions` is the recognized set, lowercase; matching is
/// case-insensitive because [`FileEntry::parse`] lowercases extensions.
/// `config.manifest_file` is skipped by name. The returned order is
/// deterministic for a fixed directory snapshot.
pub fn scan(dir: &Path, config: &RenumberConfig) -> Result<Vec<FileEntry>, ScanError> {
    let mut entries: Vec<FileEntry> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.') && *name != config.manifest_file)
        .map(|name| FileEntry::parse(&name))
        .filter(|entry| config.extensions.iter().any(|ext| *ext == entry.ext))
        .collect();

    entries.sort_by(|a, b| naming::natural_cmp(&a.name, &b.name));
    Ok(entries)
}
