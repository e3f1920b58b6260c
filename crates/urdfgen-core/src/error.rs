//! Error types for the export paths

/// Errors that can occur while exporting a robot
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The named component has no URDF representation. Recoverable: the
    /// URDF exporter skips the component and continues.
    #[error("component '{0}' has no URDF representation")]
    Unimplemented(String),

    /// Failed to write an output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A component produced XML fragment text that does not parse.
    #[error("invalid URDF fragment: {0}")]
    Fragment(#[from] quick_xml::Error),

    /// JSON serialization failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
