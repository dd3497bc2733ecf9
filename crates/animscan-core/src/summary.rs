//! Extracted animation records.
//!
//! These are the flat records the extractor produces and both renderers
//! consume. The serialized field names (`channels`, `samplers`) follow the
//! export format rather than the in-memory names.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Summary of a single animation clip within a container file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationSummary {
    /// Zero-based clip index within the file.
    pub index: usize,
    /// Clip name, or `Animation_<index>` when the container leaves it unset.
    pub name: String,
    #[serde(rename = "channels")]
    pub channel_count: usize,
    #[serde(rename = "samplers")]
    pub sampler_count: usize,
    /// Inferred clip length in seconds. `None` when no channel resolves a
    /// positive time maximum; a zero maximum is normalized to `None` as well.
    pub duration: Option<f64>,
    /// Deduplicated scene-node indices targeted by the clip's channels,
    /// sorted for deterministic output.
    pub target_nodes: Vec<usize>,
    /// Deduplicated animated property paths ("translation", "rotation",
    /// "scale", "weights"), sorted for deterministic output.
    pub animation_types: Vec<String>,
}

impl AnimationSummary {
    /// Fallback name for unnamed clips.
    pub fn default_name(index: usize) -> String {
        format!("Animation_{index}")
    }
}

/// Scan outcome for one container file.
///
/// Invariant: `total_animations == animations.len()`. When `error` is set the
/// clip list is empty and the count is zero; no partial extraction survives a
/// failed load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    pub file_path: String,
    pub file_name: String,
    pub animations: Vec<AnimationSummary>,
    pub total_animations: usize,
    pub error: Option<String>,
}

impl FileResult {
    /// Build a successful result; the total is derived from the clip list.
    pub fn success(path: &Path, animations: Vec<AnimationSummary>) -> Self {
        Self {
            file_path: path.display().to_string(),
            file_name: file_name_of(path),
            total_animations: animations.len(),
            animations,
            error: None,
        }
    }

    /// Build a failed result carrying the error message; clips are dropped.
    pub fn failure(path: &Path, error: String) -> Self {
        Self {
            file_path: path.display().to_string(),
            file_name: file_name_of(path),
            animations: Vec::new(),
            total_animations: 0,
            error: Some(error),
        }
    }

    /// File name without its extension, used as the export map key.
    pub fn file_stem(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
