//! Batch analysis on top of [cmetrics_parser]
//!
//!     The parser crate analyzes one attached stream. This crate adds the
//!     file-level plumbing around it: directory scanning with glob-style
//!     name patterns, a store of matched paths, and an executive that runs
//!     the analyzer over each file and collects per-file outcomes.

pub mod executive;
pub mod scan;
pub mod store;

pub use executive::{FileOutcome, FileResult, MetricsExecutive};
pub use scan::{FileScanner, PatternError};
pub use store::FileStore;
