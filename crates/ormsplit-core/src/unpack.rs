//! Channel normalization and extraction.
//!
//! The inverse of PBR channel packing: a packed texture is first brought to
//! a plain three-channel layout, then deinterleaved into one grayscale plane
//! per channel.

use png::ColorType;
use thiserror::Error;

use crate::load::SourceImage;
use crate::maps::{ChannelPlane, MapKind, RgbBuffer};

/// A channel layout the normalizer cannot bring to three channels.
/// Fatal: extraction never runs.
#[derive(Debug, Error)]
#[error("cannot normalize {layout} layout ({channels} channel(s)) to RGB")]
pub struct ChannelCountError {
    /// Name of the offending layout.
    pub layout: &'static str,
    /// Channel count of the offending layout.
    pub channels: u8,
}

/// Bring a decoded source to exactly three channels.
///
/// - RGB passes through unchanged.
/// - RGBA drops the fourth channel. Deliberately lossy: alpha carries no
///   map in the ORM convention.
/// - Grayscale replicates its single channel into R, G and B.
/// - Gray+alpha replicates gray and drops alpha.
/// - Palette images reach this point already expanded to RGB by the
///   decoder; palette data that was not expandable is rejected.
pub fn normalize_rgb(source: &SourceImage) -> Result<RgbBuffer, ChannelCountError> {
    let data = match source.color_type {
        ColorType::Rgb => source.data.clone(),
        ColorType::Rgba => {
            let mut rgb = Vec::with_capacity(source.data.len() / 4 * 3);
            for px in source.data.chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
            }
            rgb
        }
        ColorType::Grayscale => {
            let mut rgb = Vec::with_capacity(source.data.len() * 3);
            for &v in &source.data {
                rgb.extend_from_slice(&[v, v, v]);
            }
            rgb
        }
        ColorType::GrayscaleAlpha => {
            let mut rgb = Vec::with_capacity(source.data.len() / 2 * 3);
            for px in source.data.chunks_exact(2) {
                rgb.extend_from_slice(&[px[0], px[0], px[0]]);
            }
            rgb
        }
        ColorType::Indexed => {
            return Err(ChannelCountError {
                layout: source.color_type_name(),
                channels: source.channels(),
            });
        }
    };

    Ok(RgbBuffer::from_raw(source.width, source.height, data))
}

/// Deinterleave a three-channel buffer into `[AO, Roughness, Metallic]`
/// planes.
///
/// Pure and lossless: plane `i` carries channel `i`'s bytes verbatim, with
/// no scaling and no gamma correction. Each returned plane owns its data
/// independently.
pub fn split_channels(buffer: &RgbBuffer) -> [ChannelPlane; 3] {
    MapKind::ALL.map(|kind| {
        let data = buffer
            .data
            .iter()
            .skip(kind.channel())
            .step_by(3)
            .copied()
            .collect();
        ChannelPlane {
            width: buffer.width,
            height: buffer.height,
            data,
        }
    })
}
