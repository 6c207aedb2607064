//! Output naming and persistence.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::maps::{ChannelPlane, MapKind};
use crate::png::{self, PngConfig, PngError};

/// A plane's destination: which map it is and where it will be written.
#[derive(Debug, Clone)]
pub struct OutputDescriptor {
    /// The map being written.
    pub kind: MapKind,
    /// Derived output path.
    pub path: PathBuf,
}

impl OutputDescriptor {
    /// Pair a map with its derived path beside the source.
    pub fn for_source(source: &Path, kind: MapKind) -> Self {
        Self {
            kind,
            path: derive_output_path(source, kind),
        }
    }
}

/// Derive the output path for one map.
///
/// `textures/rock.png` becomes `textures/rock_AO.png` (and so on for the
/// other suffixes): same directory as the source, source extension
/// dropped. The mapping is deterministic; an existing file at the derived
/// path is overwritten.
pub fn derive_output_path(source: &Path, kind: MapKind) -> PathBuf {
    let mut name = source
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("texture"));
    name.push(format!("_{}.png", kind.suffix()));
    source.with_file_name(name)
}

/// One map persisted to disk.
#[derive(Debug, Clone)]
pub struct WrittenMap {
    /// The map that was written.
    pub kind: MapKind,
    /// Where it was written.
    pub path: PathBuf,
    /// BLAKE3 hash of the encoded PNG bytes.
    pub hash: String,
}

/// A write that could not complete, identifying the failing path.
#[derive(Debug, Error)]
#[error("failed to write {kind} map to {}: {source}", path.display())]
pub struct MapWriteError {
    /// The map that failed.
    pub kind: MapKind,
    /// The path that could not be written.
    pub path: PathBuf,
    #[source]
    pub source: PngError,
}

/// Combined result of the three output writes.
#[derive(Debug, Default)]
pub struct WriteOutcome {
    /// Maps persisted to disk, in AO, Roughness, Metallic order.
    pub written: Vec<WrittenMap>,
    /// Writes that could not complete.
    pub failed: Vec<MapWriteError>,
}

/// Persist the three planes beside the source.
///
/// All three writes are attempted regardless of earlier failures; there is
/// no rollback, so files already written stay on disk and the outcome
/// reports both sides.
pub fn write_planes(
    planes: &[ChannelPlane; 3],
    source_path: &Path,
    config: &PngConfig,
) -> WriteOutcome {
    let mut outcome = WriteOutcome::default();

    for (kind, plane) in MapKind::ALL.into_iter().zip(planes.iter()) {
        let OutputDescriptor { kind, path } = OutputDescriptor::for_source(source_path, kind);

        match png::write_grayscale_to_vec_with_hash(plane, config) {
            Ok((bytes, hash)) => match std::fs::write(&path, &bytes) {
                Ok(()) => outcome.written.push(WrittenMap { kind, path, hash }),
                Err(e) => outcome.failed.push(MapWriteError {
                    kind,
                    path,
                    source: PngError::Io(e),
                }),
            },
            Err(source) => outcome.failed.push(MapWriteError { kind, path, source }),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_planes() -> [ChannelPlane; 3] {
        [10u8, 20, 30].map(|v| ChannelPlane {
            width: 4,
            height: 4,
            data: vec![v; 16],
        })
    }

    #[test]
    fn test_derived_names() {
        let source = Path::new("textures/rock.png");
        assert_eq!(
            derive_output_path(source, MapKind::Ao),
            Path::new("textures/rock_AO.png")
        );
        assert_eq!(
            derive_output_path(source, MapKind::Roughness),
            Path::new("textures/rock_Roughness.png")
        );
        assert_eq!(
            derive_output_path(source, MapKind::Metallic),
            Path::new("textures/rock_Metallic.png")
        );
    }

    #[test]
    fn test_derived_name_ignores_source_extension() {
        let source = Path::new("rock.tga");
        assert_eq!(
            derive_output_path(source, MapKind::Metallic),
            Path::new("rock_Metallic.png")
        );
    }

    #[test]
    fn test_write_planes_writes_all_three() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("rock.png");

        let outcome = write_planes(&flat_planes(), &source, &PngConfig::default());

        assert_eq!(outcome.written.len(), 3);
        assert!(outcome.failed.is_empty());
        for map in &outcome.written {
            assert!(map.path.exists());
            assert_eq!(map.path.parent(), source.parent());
        }
    }

    #[test]
    fn test_write_planes_continues_past_a_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("rock.png");
        // A directory squatting on the AO path makes that write fail.
        std::fs::create_dir(tmp.path().join("rock_AO.png")).unwrap();

        let outcome = write_planes(&flat_planes(), &source, &PngConfig::default());

        assert_eq!(outcome.written.len(), 2);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].kind, MapKind::Ao);
        assert!(outcome.failed[0].path.ends_with("rock_AO.png"));
        assert!(tmp.path().join("rock_Roughness.png").exists());
        assert!(tmp.path().join("rock_Metallic.png").exists());
    }
}
