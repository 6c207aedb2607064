//! The split pipeline: load, normalize, extract, write.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::load::{self, LoadError};
use crate::png::PngConfig;
use crate::unpack::{self, ChannelCountError};
use crate::write::{self, MapWriteError, WrittenMap};

/// Fatal pipeline errors. Nothing has been written when these occur.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    ChannelCount(#[from] ChannelCountError),
}

/// Result of one split run.
#[derive(Debug)]
pub struct SplitReport {
    /// The source texture the maps were split from.
    pub source: PathBuf,
    /// Source (and output) width in pixels.
    pub width: u32,
    /// Source (and output) height in pixels.
    pub height: u32,
    /// Maps persisted to disk, in AO, Roughness, Metallic order.
    pub written: Vec<WrittenMap>,
    /// Writes that could not complete.
    pub failed: Vec<MapWriteError>,
}

impl SplitReport {
    /// True when at least one output could not be written.
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Split a packed ORM texture into AO, Roughness and Metallic maps beside
/// the source file.
///
/// The four stages run in strict sequence on the calling thread; no state
/// survives the run. A write failure does not abort the remaining writes:
/// the returned report lists both the persisted and the failed outputs,
/// and only load and normalization failures are errors.
pub fn split_file(path: &Path, config: &PngConfig) -> Result<SplitReport, SplitError> {
    let source = load::load_source(path)?;
    let rgb = unpack::normalize_rgb(&source)?;
    let planes = unpack::split_channels(&rgb);
    let outcome = write::write_planes(&planes, path, config);

    Ok(SplitReport {
        source: path.to_path_buf(),
        width: source.width,
        height: source.height,
        written: outcome.written,
        failed: outcome.failed,
    })
}
