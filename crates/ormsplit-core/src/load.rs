//! Source texture loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use png::{BitDepth, ColorType, Transformations};
use thiserror::Error;

/// Errors from loading a source texture. Fatal: nothing is written.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },
}

/// A decoded source texture, immutable once loaded.
///
/// `color_type` and `bit_depth` describe the layout after decode-time
/// transformations: palettes are expanded to RGB, sub-8-bit grayscale is
/// widened and 16-bit samples are reduced to 8-bit, so `data` always holds
/// one byte per sample.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel layout of `data`.
    pub color_type: ColorType,
    /// Bit depth of `data`, always eight after decode.
    pub bit_depth: BitDepth,
    /// Interleaved sample data, row-major.
    pub data: Vec<u8>,
}

impl SourceImage {
    /// Number of channels in the decoded layout.
    pub fn channels(&self) -> u8 {
        self.color_type.samples() as u8
    }

    /// Human-readable name of the decoded channel layout.
    pub fn color_type_name(&self) -> &'static str {
        match self.color_type {
            ColorType::Grayscale => "Grayscale",
            ColorType::GrayscaleAlpha => "GrayscaleAlpha",
            ColorType::Indexed => "Indexed",
            ColorType::Rgb => "RGB",
            ColorType::Rgba => "RGBA",
        }
    }
}

/// Load and decode a PNG from disk.
///
/// Fails with [`LoadError::Io`] when the path is missing or unreadable and
/// with [`LoadError::Decode`] when the file is not a decodable PNG. No side
/// effects beyond reading.
pub fn load_source(path: &Path) -> Result<SourceImage, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(Transformations::normalize_to_color8());

    let mut reader = decoder.read_info().map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut data)
        .map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    data.truncate(info.buffer_size());

    Ok(SourceImage {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_io_error() {
        let err = load_source(Path::new("/nonexistent/texture.png")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_undecodable_data_is_decode_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("not_a.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_source(&path).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }
}
