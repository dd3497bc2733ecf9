//! Batch manifest configuration.
//!
//! A manifest replaces a hard-coded file list: a small JSON document naming
//! the files to scan and, optionally, where the export should land.
//!
//! ```json
//! {
//!   "files": ["resources/bee-v1.glb", "resources/spider_small.glb"],
//!   "output": "glb_animations.json"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Files to scan and an optional export destination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl ScanConfig {
    /// Parse a manifest from its JSON text.
    pub fn from_json(s: &str) -> Result<Self, ScanError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
