//! Error types for container scanning.

/// Errors raised while loading or exporting scan data.
///
/// Per-file failures are converted to strings and recorded on the owning
/// [`crate::FileResult`] rather than propagated, so only the export path and
/// manifest loading surface these directly.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    /// Input file does not exist on disk.
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// The container parser rejected the file.
    #[error("{reason}")]
    Parse { reason: String },

    /// Wrapper around standard IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or manifest parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScanError {
    /// Get error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "input",
            Self::Parse { .. } => "parse",
            Self::Io(_) => "io",
            Self::Json(_) => "serialization",
        }
    }
}

impl From<gltf::Error> for ScanError {
    fn from(err: gltf::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
