//! # photo-renumber
//!
//! Renumbers the image files of one gallery directory into a stable numeric
//! naming scheme and emits a manifest module describing their presentation
//! order. Hand-numbered files in a protected low range keep their names;
//! free-form names (`beach.jpg`, `IMG_4021.webp`) are moved into the next
//! free numeric slots.
//!
//! # Architecture: Single-Pass Batch Pipeline
//!
//! ```text
//! scan → classify → allocate → rename → manifest
//! ```
//!
//! No state persists between runs. Idempotence falls out of the naming
//! scheme itself: once a file has a numeric name it is never a candidate
//! again, so a second run against an unchanged directory renames nothing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists one directory, filtered to recognized image extensions |
//! | [`classify`] | Partitions entries into protected / numbered / candidates, builds the reserved-number set |
//! | [`allocate`] | Assigns ascending free numeric slots to candidates, with a defensive target re-check |
//! | [`rename`] | Two-phase (stage to temp, then commit) collision-free batch rename |
//! | [`manifest`] | Re-scans final state and writes the ordered manifest module |
//! | [`pipeline`] | Orchestrates the stages; `run` applies, `plan` dry-runs |
//! | [`config`] | `renumber.toml` loading, validation, stock config generation |
//! | [`naming`] | Numeric-stem filename parsing and natural-order comparison |
//! | [`output`] | CLI output formatting — run and plan summaries |
//!
//! # Design Decisions
//!
//! ## Two-Phase Rename
//!
//! Targets can coincide with names other files in the same batch still hold.
//! Every batch therefore stages all sources under unique dot-prefixed
//! temporary names before committing any target. Staging is also why the
//! scanner skips hidden files: leftovers from a crashed run stay invisible.
//!
//! ## Numbered Files Are Never Re-Numbered
//!
//! Any purely numeric name — inside the protected range or not — keeps both
//! its name and its number. Dense renumbering would break external
//! references to existing names, so gaps in the sequence are tolerated by
//! policy.
//!
//! ## Not Concurrency-Safe
//!
//! One run, one directory, single-threaded. Concurrent runs against the same
//! directory race each other's scans; callers must serialize externally.

pub mod allocate;
pub mod classify;
pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod rename;
pub mod scan;
