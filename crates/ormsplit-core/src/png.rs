//! Deterministic PNG writer for extracted planes.
//!
//! Encoding uses fixed compression settings and embeds no timestamps, so
//! identical plane data always produces byte-identical files.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::maps::ChannelPlane;

/// Errors from PNG encoding.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration.
///
/// Both fields must stay fixed across runs for idempotent output; the
/// presets only trade encoding speed against file size.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Deflate compression level.
    pub compression: Compression,
    /// Scanline filter strategy.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Config optimized for file size (slower).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Config optimized for speed (larger files).
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a channel plane to a grayscale PNG file.
pub fn write_grayscale(
    plane: &ChannelPlane,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_grayscale_to_writer(plane, writer, config)
}

/// Write a channel plane as a grayscale PNG to any writer.
pub fn write_grayscale_to_writer<W: Write>(
    plane: &ChannelPlane,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, plane.width, plane.height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(plane.as_bytes())?;

    Ok(())
}

/// Encode a channel plane to memory and return the bytes with their hash.
pub fn write_grayscale_to_vec_with_hash(
    plane: &ChannelPlane,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_grayscale_to_writer(plane, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Compute the BLAKE3 hash of encoded PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_plane() -> ChannelPlane {
        let mut data = Vec::with_capacity(64 * 64);
        for y in 0..64u32 {
            for x in 0..64u32 {
                data.push(((x + y) * 2) as u8);
            }
        }
        ChannelPlane {
            width: 64,
            height: 64,
            data,
        }
    }

    #[test]
    fn test_grayscale_deterministic() {
        let plane = gradient_plane();
        let config = PngConfig::default();

        let (data1, hash1) = write_grayscale_to_vec_with_hash(&plane, &config).unwrap();
        let (data2, hash2) = write_grayscale_to_vec_with_hash(&plane, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_encoded_plane_round_trips() {
        let plane = gradient_plane();
        let (data, _) = write_grayscale_to_vec_with_hash(&plane, &PngConfig::default()).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(data));
        let mut reader = decoder.read_info().unwrap();
        let mut pixels = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut pixels).unwrap();
        pixels.truncate(info.buffer_size());

        assert_eq!(info.color_type, ColorType::Grayscale);
        assert_eq!(info.width, 64);
        assert_eq!(info.height, 64);
        assert_eq!(pixels, plane.data);
    }

    #[test]
    fn test_write_grayscale_creates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("plane.png");

        write_grayscale(&gradient_plane(), &path, &PngConfig::fast()).unwrap();

        assert!(path.exists());
    }
}
