//! Two-phase batch renaming.
//!
//! Targets in a batch can coincide with names other batch members still hold
//! (`a.jpg → b.jpg` while `b.jpg → c.jpg`), so applying pairs one by one can
//! collide mid-flight. Instead every batch runs a two-phase protocol:
//!
//! 1. **Stage** — rename each source to a unique temporary name.
//! 2. **Commit** — rename each temporary to its final target.
//!
//! Once staging completes, every target is guaranteed free: targets were
//! validated against the reserved set up front and only become occupied
//! during commit itself. Each item carries an explicit state
//! (`Pending → Staged → Committed`), which is what makes a partial failure
//! inspectable.
//!
//! ## Failure semantics
//!
//! Any individual rename failure aborts the batch where it stands. There is
//! no rollback: a failure during staging leaves earlier items under their
//! temporary names, a failure during commit leaves later items staged. The
//! error is fatal and carries the offending path. Temporary names are
//! dot-prefixed, so anything left behind is ignored by the next scan.

use crate::allocate::RenamePair;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("failed to stage {from} as {tmp}: {source}")]
    Stage {
        from: String,
        tmp: String,
        source: std::io::Error,
    },
    #[error("failed to commit {tmp} as {to}: {source}")]
    Commit {
        tmp: String,
        to: String,
        source: std::io::Error,
    },
}

/// Where a batch item is in the two-phase protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RenameState {
    Pending,
    Staged(PathBuf),
    Committed,
}

struct BatchItem {
    pair: RenamePair,
    tmp: String,
    state: RenameState,
}

/// Apply `pairs` inside `dir` with the two-phase protocol.
///
/// Pair targets must be mutually distinct and free of collisions with
/// untouched files — the allocator guarantees both. An empty batch is a
/// no-op. On error the batch is left partially applied; see the module docs.
pub fn apply(dir: &Path, pairs: &[RenamePair]) -> Result<(), RenameError> {
    let stamp = batch_stamp();
    let mut batch: Vec<BatchItem> = pairs
        .iter()
        .enumerate()
        .map(|(seq, pair)| BatchItem {
            tmp: format!(".renumber-tmp-{stamp}-{seq}-{}", pair.from),
            pair: pair.clone(),
            state: RenameState::Pending,
        })
        .collect();

    // Phase 1: move every source out of the way.
    for item in &mut batch {
        let tmp_path = dir.join(&item.tmp);
        fs::rename(dir.join(&item.pair.from), &tmp_path).map_err(|source| {
            RenameError::Stage {
                from: item.pair.from.clone(),
                tmp: item.tmp.clone(),
                source,
            }
        })?;
        item.state = RenameState::Staged(tmp_path);
    }

    // Phase 2: land every temporary on its final name.
    for item in &mut batch {
        let RenameState::Staged(tmp_path) = &item.state else {
            continue;
        };
        fs::rename(tmp_path, dir.join(&item.pair.to)).map_err(|source| RenameError::Commit {
            tmp: item.tmp.clone(),
            to: item.pair.to.clone(),
            source,
        })?;
        item.state = RenameState::Committed;
    }

    Ok(())
}

/// Per-batch uniqueness stamp: pid + wall-clock nanos. Combined with the
/// per-item sequence number and original name, temporary names cannot clash
/// within a batch or with leftovers from an earlier crashed run.
fn batch_stamp() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("{}-{nanos}", std::process::id())
}
