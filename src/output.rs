//! CLI output formatting.
//!
//! Each report has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Protected: 1 file
//! Renamed: 2 files
//!     beach.jpg → 21.jpg
//!     vacation.png → 22.png
//! Manifest: 4 entries → manifest.js
//! ```

use crate::pipeline::RunSummary;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn count_noun(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Format the summary of an applied run.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Protected: {}",
        count_noun(summary.protected, "file")
    ));
    lines.push(format!(
        "Renamed: {}",
        count_noun(summary.renames.len(), "file")
    ));
    for pair in &summary.renames {
        lines.push(format!("{}{} → {}", indent(1), pair.from, pair.to));
    }
    let noun = if summary.manifest_entries == 1 {
        "entry"
    } else {
        "entries"
    };
    lines.push(format!(
        "Manifest: {} {} → {}",
        summary.manifest_entries,
        noun,
        summary.manifest_path.display()
    ));
    lines
}

/// Format a dry-run plan: same shape, explicitly marked as not applied.
pub fn format_plan(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec!["Plan (nothing applied)".to_string()];
    lines.extend(
        format_summary(summary)
            .into_iter()
            .map(|line| format!("{}{line}", indent(1))),
    );
    lines
}

pub fn print_summary(summary: &RunSummary) {
    for line in format_summary(summary) {
        println!("{line}");
    }
}

pub fn print_plan(summary: &RunSummary) {
    for line in format_plan(summary) {
        println!("{line}");
    }
}
