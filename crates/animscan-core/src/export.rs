//! JSON export of extracted animation data.
//!
//! The export document is an object keyed by file stem, each value a full
//! [`FileResult`]. Serialization uses 2-space indentation and leaves
//! non-ASCII characters verbatim.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ScanError;
use crate::summary::FileResult;

/// Build the stem-keyed export map. Duplicate stems keep the last result.
pub fn export_map(results: &[FileResult]) -> BTreeMap<&str, &FileResult> {
    results.iter().map(|r| (r.file_stem(), r)).collect()
}

/// Serialize the export document as indented JSON.
pub fn render_export_json(results: &[FileResult]) -> Result<String, ScanError> {
    Ok(serde_json::to_string_pretty(&export_map(results))?)
}

/// Serialize and write the export document to `path`.
pub fn write_export(results: &[FileResult], path: &Path) -> Result<(), ScanError> {
    let json = render_export_json(results)?;
    std::fs::write(path, json)?;
    tracing::info!(output = %path.display(), files = results.len(), "export written");
    Ok(())
}
