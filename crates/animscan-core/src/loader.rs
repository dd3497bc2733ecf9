//! Container loading.
//!
//! The binary parse itself is delegated to the `gltf` crate; this module only
//! wraps it so that a missing file and a failed parse both surface as
//! [`ScanError`] values the extractor can record per file.

use std::path::Path;

use gltf::{Document, Gltf};

use crate::error::ScanError;

/// Open and parse a GLB or glTF container into its document graph.
///
/// Buffer payloads are not resolved; the scan only needs the structural
/// graph (clips, channels, samplers, accessor bounds).
pub fn load_document(path: &Path) -> Result<Document, ScanError> {
    if !path.exists() {
        return Err(ScanError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let gltf = Gltf::open(path)?;
    Ok(gltf.document)
}
