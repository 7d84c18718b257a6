//! Pipeline orchestration: scan → classify → allocate → rename → manifest.
//!
//! [`run`] executes the whole batch against one directory; [`plan`] computes
//! the same rename assignment without touching anything, for dry runs. Both
//! take an explicit [`RenumberConfig`] scoped to the invocation — there is
//! no shared state between runs, which is what makes a second run a no-op:
//! everything renamed in the first run now has a numeric name and classifies
//! as already-numbered.

use crate::allocate::{self, RenamePair};
use crate::classify::{self, Partition};
use crate::config::RenumberConfig;
use crate::manifest::{self, ManifestError};
use crate::rename::{self, RenameError};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Rename(#[from] RenameError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// What a run did (or, for a plan, would do).
#[derive(Debug)]
pub struct RunSummary {
    /// Files inside the protected range, left untouched.
    pub protected: usize,
    /// Numeric names outside the protected range, also left untouched.
    pub already_numbered: usize,
    /// The applied (or planned) renames, in assignment order.
    pub renames: Vec<RenamePair>,
    /// Entries in the written manifest; for a plan, the post-rename count.
    pub manifest_entries: usize,
    /// Where the manifest was (or would be) written.
    pub manifest_path: PathBuf,
}

/// Run the full pipeline against `dir`.
pub fn run(dir: &Path, config: &RenumberConfig) -> Result<RunSummary, PipelineError> {
    let (partition, pairs) = compute(dir, config)?;

    rename::apply(dir, &pairs)?;
    let output = manifest::write(dir, config)?;

    Ok(RunSummary {
        protected: partition.protected.len(),
        already_numbered: partition.numbered.len(),
        renames: pairs,
        manifest_entries: output.entries.len(),
        manifest_path: output.path,
    })
}

/// Compute the rename plan for `dir` without renaming or writing anything.
///
/// The allocator's defensive existence check still runs (it only reads), so
/// the plan matches what [`run`] would do against the same snapshot.
pub fn plan(dir: &Path, config: &RenumberConfig) -> Result<RunSummary, PipelineError> {
    let (partition, pairs) = compute(dir, config)?;

    let total =
        partition.protected.len() + partition.numbered.len() + pairs.len();

    Ok(RunSummary {
        protected: partition.protected.len(),
        already_numbered: partition.numbered.len(),
        renames: pairs,
        manifest_entries: total,
        manifest_path: dir.join(&config.manifest_file),
    })
}

fn compute(
    dir: &Path,
    config: &RenumberConfig,
) -> Result<(Partition, Vec<RenamePair>), PipelineError> {
    let entries = scan::scan(dir, config)?;
    let mut reserved = classify::reserved_numbers(&entries);
    let partition = classify::partition(entries, config.protected);

    let pairs = allocate::allocate(
        dir,
        &partition.candidates,
        config.start_number,
        &mut reserved,
        config.zero_pad_width,
    );

    Ok((partition, pairs))
}
