//! Slot allocation for renumber candidates.
//!
//! A single cursor starts at the configured floor and walks upward, skipping
//! every reserved number. Each candidate, in order, takes the cursor's value;
//! the value joins the reserved set so later candidates (and later runs)
//! can never collide. Assignment is strictly increasing in candidate order.
//!
//! After computing a target name the allocator re-checks the filesystem for a
//! file already bearing that exact name. The reserved set covers everything
//! the scan saw, but the directory can change between scan and allocation;
//! a hit marks the number reserved and retries with the next cursor value
//! rather than ever queuing an overwrite.

use crate::naming::{self, FileEntry};
use std::collections::BTreeSet;
use std::path::Path;

/// One planned rename, `from` and `to` both directory-relative filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub from: String,
    pub to: String,
}

/// Assign ascending free numbers to `candidates`, starting at `start`.
///
/// `reserved` is consumed and extended: every assigned number is added, so
/// the set reflects the post-rename directory when this returns. The
/// candidate order is preserved — callers pass them natural-sorted for
/// deterministic output. An empty candidate list is a valid no-op.
pub fn allocate(
    dir: &Path,
    candidates: &[FileEntry],
    start: u32,
    reserved: &mut BTreeSet<u32>,
    pad: usize,
) -> Vec<RenamePair> {
    let mut pairs = Vec::with_capacity(candidates.len());
    let mut cursor = start;

    for candidate in candidates {
        let to = loop {
            while reserved.contains(&cursor) {
                cursor += 1;
            }
            let target = target_name(cursor, pad, &candidate.ext);
            if dir.join(&target).exists() {
                // Appeared since the scan. Reserve it and keep walking.
                reserved.insert(cursor);
                continue;
            }
            reserved.insert(cursor);
            break target;
        };
        pairs.push(RenamePair {
            from: candidate.name.clone(),
            to,
        });
        cursor += 1;
    }

    pairs
}

fn target_name(n: u32, pad: usize, ext: &str) -> String {
    if ext.is_empty() {
        naming::format_number(n, pad)
    } else {
        format!("{}.{}", naming::format_number(n, pad), ext)
    }
}
