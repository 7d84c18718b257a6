//! Manifest generation.
//!
//! The manifest is a small JavaScript module the gallery front-end imports:
//! a comment header recording how it was generated, then one record per file
//! in presentation order.
//!
//! ```text
//! // Generated by photo-renumber on 2026-08-30T12:00:00Z
//! // Protected range: 1-19, start number: 20
//! export const images = [
//!   { src: "1.png", label: "image" },
//!   { src: "3.jpg", label: "image" },
//!   { src: "20.jpg", label: "image" },
//! ];
//! ```
//!
//! Ordering is total: numeric names ascend by value, any residual free-form
//! names follow in natural order. The builder re-lists the directory rather
//! than reusing pre-rename state, so the manifest always reflects ground
//! truth even if the rename batch was a no-op or the directory changed.

use crate::config::RenumberConfig;
use crate::naming::{self, FileEntry};
use crate::scan::{self, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Timestamp format error: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One manifest record: a directory-relative path and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub src: String,
    pub label: String,
}

/// Result of writing a manifest: where it landed and what it contains.
#[derive(Debug)]
pub struct ManifestOutput {
    pub path: PathBuf,
    pub entries: Vec<ManifestEntry>,
}

/// Order entries for presentation: numeric ascending, then natural order.
pub fn order(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by(|a, b| match (a.number, b.number) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => naming::natural_cmp(&a.name, &b.name),
    });
    entries
}

/// Build manifest records from ordered entries.
pub fn build(entries: &[FileEntry], label: &str) -> Vec<ManifestEntry> {
    entries
        .iter()
        .map(|e| ManifestEntry {
            src: e.name.clone(),
            label: label.to_string(),
        })
        .collect()
}

/// Render the manifest module source.
///
/// String values go through `serde_json` so quotes and backslashes in
/// filenames cannot break the literal.
pub fn render(
    entries: &[ManifestEntry],
    config: &RenumberConfig,
    generated_at: OffsetDateTime,
) -> Result<String, ManifestError> {
    let mut out = String::new();
    out.push_str(&format!(
        "// Generated by photo-renumber on {}\n",
        generated_at.format(&Rfc3339)?
    ));
    out.push_str(&format!(
        "// Protected range: {}-{}, start number: {}\n",
        config.protected.min, config.protected.max, config.start_number
    ));
    out.push_str("export const images = [\n");
    for entry in entries {
        out.push_str(&format!(
            "  {{ src: {}, label: {} }},\n",
            serde_json::to_string(&entry.src)?,
            serde_json::to_string(&entry.label)?,
        ));
    }
    out.push_str("];\n");
    Ok(out)
}

/// Re-scan `dir` and write its manifest per `config`.
///
/// Returns the written path and the records, in order, for reporting.
pub fn write(dir: &Path, config: &RenumberConfig) -> Result<ManifestOutput, ManifestError> {
    let entries = order(scan::scan(dir, config)?);
    let records = build(&entries, &config.label);
    let source = render(&records, config, OffsetDateTime::now_utc())?;

    let path = dir.join(&config.manifest_file);
    fs::write(&path, source)?;

    Ok(ManifestOutput {
        path,
        entries: records,
    })
}
