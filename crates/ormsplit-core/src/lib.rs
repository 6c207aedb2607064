//! ORM texture splitting.
//!
//! PBR asset pipelines commonly pack three grayscale material maps into the
//! channels of a single RGB texture: Ambient Occlusion in red, Roughness in
//! green, Metallic in blue. This crate splits such a packed texture back into
//! three standalone single-channel PNGs, named after the source file:
//!
//! ```text
//! rock.png  ->  rock_AO.png, rock_Roughness.png, rock_Metallic.png
//! ```
//!
//! The pipeline runs four stages in strict sequence: load the source PNG,
//! normalize it to exactly three channels (alpha is dropped, grayscale is
//! replicated), extract one plane per channel, and write each plane beside
//! the source. The R/G/B to AO/Roughness/Metallic mapping is the packing
//! convention this tool exists to honor and is not configurable.
//!
//! # Example
//!
//! ```no_run
//! use ormsplit_core::{split_file, PngConfig};
//! use std::path::Path;
//!
//! let report = split_file(Path::new("rock.png"), &PngConfig::default())?;
//! for map in &report.written {
//!     println!("{} -> {}", map.kind, map.path.display());
//! }
//! # Ok::<(), ormsplit_core::SplitError>(())
//! ```
//!
//! # Determinism
//!
//! PNG encoding uses fixed compression settings and writes no timestamps,
//! so running the splitter twice over an unchanged source produces
//! byte-identical files both times.

pub mod load;
pub mod maps;
pub mod pipeline;
pub mod png;
pub mod unpack;
pub mod write;

// Re-export main types for convenience
pub use load::{load_source, LoadError, SourceImage};
pub use maps::{ChannelPlane, MapKind, RgbBuffer};
pub use pipeline::{split_file, SplitError, SplitReport};
pub use png::{PngConfig, PngError};
pub use unpack::{normalize_rgb, split_channels, ChannelCountError};
pub use write::{
    derive_output_path, write_planes, MapWriteError, OutputDescriptor, WriteOutcome, WrittenMap,
};
