//! Centralized filename parsing for the numeric naming scheme.
//!
//! Every file in a gallery directory follows one of two shapes:
//! a purely numeric stem (`020.jpg`, `007.png`) or a free-form name
//! (`beach.jpg`, `IMG_4021.webp`). This module provides the single parsing
//! function the whole pipeline agrees on, plus the natural-order comparison
//! used wherever free-form names need a deterministic order.
//!
//! ## Numeric stems
//!
//! A stem counts as numeric only when it is entirely ASCII digits. Leading
//! zeros are allowed and parse to the same number (`020` → 20), which is what
//! makes zero-padded output idempotent on a second run.

use std::cmp::Ordering;

/// A directory entry with the attributes the pipeline derives from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full filename as it appears on disk (`beach.jpg`).
    pub name: String,
    /// Stem before the final dot, unmodified (`beach`).
    pub stem: String,
    /// Extension after the final dot, lowercased, no dot (`jpg`). Empty if
    /// the name has no extension.
    pub ext: String,
    /// Parsed number, present only when the stem is purely ASCII digits.
    pub number: Option<u32>,
}

impl FileEntry {
    /// Parse a filename into its derived attributes.
    ///
    /// - `"020.jpg"` → stem="020", ext="jpg", number=Some(20)
    /// - `"beach.JPG"` → stem="beach", ext="jpg", number=None
    /// - `"IMG_4021.webp"` → number=None (stem is not purely digits)
    /// - `"noext"` → stem="noext", ext=""
    pub fn parse(name: &str) -> FileEntry {
        let (stem, ext) = match name.rfind('.') {
            Some(pos) => (&name[..pos], name[pos + 1..].to_lowercase()),
            None => (name, String::new()),
        };
        FileEntry {
            name: name.to_string(),
            stem: stem.to_string(),
            ext,
            number: parse_number(stem),
        }
    }
}

/// Parse a stem as a number iff it is non-empty and entirely ASCII digits.
///
/// Stems that merely *contain* digits (`IMG_4021`) are not numbers. A digit
/// run too large for `u32` is treated as not numeric rather than an error.
pub fn parse_number(stem: &str) -> Option<u32> {
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

/// Render a number with the configured zero padding.
///
/// `pad = 0` means no padding; numbers wider than `pad` are never truncated.
pub fn format_number(n: u32, pad: usize) -> String {
    format!("{n:0pad$}")
}

/// Numeric-aware, case-insensitive filename comparison.
///
/// Digit runs compare by value, so `file9` sorts before `file10` and after
/// `file2`. Equal-value runs with different zero padding (`file2` vs
/// `file02`) and case-insensitive ties fall back to a plain byte comparison,
/// keeping the order total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let ab = a.as_bytes();
    let bb = b.as_bytes();
    let (mut i, mut j) = (0, 0);
    while i < ab.len() && j < bb.len() {
        if ab[i].is_ascii_digit() && bb[j].is_ascii_digit() {
            let ra = digit_run(ab, i);
            let rb = digit_run(bb, j);
            match cmp_digit_runs(&ab[i..ra], &bb[j..rb]) {
                Ordering::Equal => {
                    i = ra;
                    j = rb;
                }
                ord => return ord,
            }
        } else {
            match ab[i].to_ascii_lowercase().cmp(&bb[j].to_ascii_lowercase()) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                ord => return ord,
            }
        }
    }
    // One name is a prefix of the other, or only padding/case differed.
    (ab.len() - i).cmp(&(bb.len() - j)).then_with(|| a.cmp(b))
}

/// End index (exclusive) of the digit run starting at `start`.
fn digit_run(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Compare two digit runs by numeric value without parsing into an integer,
/// so arbitrarily long runs cannot overflow.
fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a_trim = &a[a.iter().take_while(|&&d| d == b'0').count()..];
    let b_trim = &b[b.iter().take_while(|&&d| d == b'0').count()..];
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
}
