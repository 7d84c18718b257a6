//! Entry classification and the reserved-number set.
//!
//! Partitions a scanned directory into three disjoint groups:
//!
//! - **protected** — numeric name inside the protected range; never renamed
//! - **numbered** — numeric name outside the protected range; also never
//!   renamed (see below), but its number is reserved
//! - **candidates** — free-form names, eligible for renumbering
//!
//! ## Policy: numbered files outside the protected range
//!
//! A file like `500.jpg` with a protected range of 1–19 is *not* pulled back
//! into a dense sequence. Only non-numeric names are candidates; every
//! numeric name, wherever it falls, keeps both its name and its number. This
//! is deliberate, documented policy — renumbering everything would break any
//! external reference to the existing names.

use crate::naming::{self, FileEntry};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Inclusive range of numbers whose files must never be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtectedRange {
    pub min: u32,
    pub max: u32,
}

impl ProtectedRange {
    pub fn contains(&self, n: u32) -> bool {
        self.min <= n && n <= self.max
    }
}

/// The three disjoint groups a directory partitions into.
#[derive(Debug)]
pub struct Partition {
    /// Numeric names inside the protected range.
    pub protected: Vec<FileEntry>,
    /// Numeric names outside the protected range. Untouched, numbers reserved.
    pub numbered: Vec<FileEntry>,
    /// Free-form names, sorted naturally — the deterministic allocation order.
    pub candidates: Vec<FileEntry>,
}

/// True iff the entry has a number inside the protected range.
pub fn is_protected(entry: &FileEntry, range: ProtectedRange) -> bool {
    entry.number.is_some_and(|n| range.contains(n))
}

/// True iff the entry's stem is purely numeric (protected files included).
pub fn is_numbered(entry: &FileEntry) -> bool {
    entry.number.is_some()
}

/// All numbers currently in use across the given entries.
///
/// Seeds the allocator's exclusion set: protected and already-numbered files
/// both contribute.
pub fn reserved_numbers(entries: &[FileEntry]) -> BTreeSet<u32> {
    entries.iter().filter_map(|e| e.number).collect()
}

/// Split entries into protected, numbered, and candidate groups.
///
/// Candidates are re-sorted by natural name order so allocation is
/// deterministic regardless of how the caller obtained the entries.
pub fn partition(entries: Vec<FileEntry>, range: ProtectedRange) -> Partition {
    let mut protected = Vec::new();
    let mut numbered = Vec::new();
    let mut candidates = Vec::new();

    for entry in entries {
        if is_protected(&entry, range) {
            protected.push(entry);
        } else if is_numbered(&entry) {
            numbered.push(entry);
        } else {
            candidates.push(entry);
        }
    }

    candidates.sort_by(|a, b| naming::natural_cmp(&a.name, &b.name));

    Partition {
        protected,
        numbered,
        candidates,
    }
}
