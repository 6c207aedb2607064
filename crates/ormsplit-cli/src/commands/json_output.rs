//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `split` and `inspect` so other
//! tools and scripts can parse the results programmatically. The core
//! crate stays serde-free; everything serializable lives here.

use serde::{Deserialize, Serialize};

use ormsplit_core::{SourceImage, SplitReport};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Source file missing, unreadable, or not a decodable PNG
    pub const LOAD_ERROR: &str = "CLI_001";
    /// Channel layout could not be normalized to three channels
    pub const CHANNEL_COUNT: &str = "CLI_002";
    /// One or more output maps could not be written
    pub const WRITE_ERROR: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source or output file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// One output map in `split --json` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRecord {
    /// Map name: "AO", "Roughness" or "Metallic"
    pub map: String,
    /// Derived output path
    pub path: String,
    /// Whether the map was persisted to disk
    pub written: bool,
    /// BLAKE3 hash of the encoded PNG (written maps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Failure reason (failed maps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Document emitted by `split --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOutput {
    /// True when all three maps were written
    pub success: bool,
    /// True when some but not all maps were written
    pub partial: bool,
    /// The source texture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Source width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Source height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Per-map results, in AO, Roughness, Metallic order
    pub maps: Vec<MapRecord>,
    /// Structured errors (empty on full success)
    pub errors: Vec<JsonError>,
}

impl SplitOutput {
    /// Build the output document from a pipeline report.
    pub fn from_report(report: &SplitReport) -> Self {
        let mut maps = Vec::with_capacity(3);
        let mut errors = Vec::new();

        for map in &report.written {
            maps.push(MapRecord {
                map: map.kind.to_string(),
                path: map.path.display().to_string(),
                written: true,
                hash: Some(map.hash.clone()),
                error: None,
            });
        }
        for failure in &report.failed {
            maps.push(MapRecord {
                map: failure.kind.to_string(),
                path: failure.path.display().to_string(),
                written: false,
                hash: None,
                error: Some(failure.source.to_string()),
            });
            errors.push(
                JsonError::new(error_codes::WRITE_ERROR, failure.to_string())
                    .with_file(failure.path.display().to_string()),
            );
        }

        Self {
            success: !report.is_partial(),
            partial: report.is_partial(),
            source: Some(report.source.display().to_string()),
            width: Some(report.width),
            height: Some(report.height),
            maps,
            errors,
        }
    }

    /// Build an output document for a run that failed before writing.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            partial: false,
            source: error.file.clone(),
            width: None,
            height: None,
            maps: Vec::new(),
            errors: vec![error],
        }
    }
}

/// Document emitted by `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// True when the header decoded cleanly
    pub success: bool,
    /// The inspected file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Channel layout name (RGB, RGBA, Grayscale, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_type: Option<String>,
    /// Bits per sample after decode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<u8>,
    /// Number of channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<u8>,
    /// Structured errors (empty on success)
    pub errors: Vec<JsonError>,
}

impl InspectOutput {
    /// Build the output document from a decoded source.
    pub fn from_source(path: &str, source: &SourceImage) -> Self {
        Self {
            success: true,
            source: Some(path.to_string()),
            width: Some(source.width),
            height: Some(source.height),
            color_type: Some(source.color_type_name().to_string()),
            bit_depth: Some(source.bit_depth as u8),
            channels: Some(source.channels()),
            errors: Vec::new(),
        }
    }

    /// Build an output document for a file that could not be decoded.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            source: error.file.clone(),
            width: None,
            height: None,
            color_type: None,
            bit_depth: None,
            channels: None,
            errors: vec![error],
        }
    }
}
