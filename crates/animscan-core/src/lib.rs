//! GLB/glTF animation-clip inspection (engine-agnostic).
//!
//! The container parse is delegated to the `gltf` crate; this crate walks the
//! parsed document once per file to summarize each clip (channel and sampler
//! counts, inferred duration, affected nodes, animated transform properties),
//! classifies the clip's likely purpose from its name, and renders the
//! results either as a console report or as an indented JSON export.
//!
//! Per-file failures never cross the batch boundary: [`scan_file`] converts
//! any loader error into a tagged [`FileResult`] and the batch continues.

pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod loader;
pub mod report;
pub mod summary;

// Re-exports for consumers (CLI, tests)
pub use classify::classify_purpose;
pub use config::ScanConfig;
pub use error::ScanError;
pub use export::{render_export_json, write_export};
pub use extract::{scan_batch, scan_document, scan_file};
pub use loader::load_document;
pub use report::{render_report, render_summary_table};
pub use summary::{AnimationSummary, FileResult};
