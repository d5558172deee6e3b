//! Tile sources: where raw DTED bytes come from.
//!
//! The terrain engine is decoupled from storage through the [`TileSource`]
//! trait; a source maps a tile name plus a [`Level`] to raw bytes. The
//! canonical resource name appends a precision-dependent suffix to the tile
//! name (`e008/n53` at level 1 becomes `e008/n53.dt1`); that mapping is a
//! property of the concrete source, not of the engine.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{DtedError, Result};

/// Precision level (resolution tier) of a DTED tile.
///
/// Coarser levels have wider post spacing but far broader availability, which
/// is what makes the engine's tiered fallback worthwhile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// DTED level 0: 30 arc-second posts (~900m).
    Level0,
    /// DTED level 1: 3 arc-second posts (~90m).
    Level1,
    /// DTED level 2: 1 arc-second posts (~30m).
    Level2,
}

impl Level {
    /// All levels ordered from highest resolution to lowest, the order the
    /// engine attempts them in.
    pub const DESCENDING: [Level; 3] = [Level::Level2, Level::Level1, Level::Level0];

    /// File suffix for this level (`dt0`, `dt1`, `dt2`).
    pub fn suffix(self) -> &'static str {
        match self {
            Level::Level0 => "dt0",
            Level::Level1 => "dt1",
            Level::Level2 => "dt2",
        }
    }

    /// Nominal latitude post spacing in arc-seconds.
    pub fn arc_seconds(self) -> f64 {
        match self {
            Level::Level0 => 30.0,
            Level::Level1 => 3.0,
            Level::Level2 => 1.0,
        }
    }

    /// Approximate ground resolution in meters.
    pub fn meters(self) -> f64 {
        match self {
            Level::Level0 => 900.0,
            Level::Level1 => 90.0,
            Level::Level2 => 30.0,
        }
    }

    /// Parse a file suffix back to a level.
    pub fn from_suffix(suffix: &str) -> Option<Level> {
        match suffix {
            "dt0" => Some(Level::Level0),
            "dt1" => Some(Level::Level1),
            "dt2" => Some(Level::Level2),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Level0 => write!(f, "0"),
            Level::Level1 => write!(f, "1"),
            Level::Level2 => write!(f, "2"),
        }
    }
}

/// Capability interface supplying raw tile bytes.
///
/// Implementations resolve a tile name at a single precision level; the
/// fallback across levels lives in the engine, not here.
#[async_trait]
pub trait TileSource: Send + Sync {
    /// Fetch the raw bytes of the named tile at the given precision level.
    ///
    /// # Errors
    ///
    /// [`DtedError::TileNotFound`] if the source has no such tile;
    /// [`DtedError::Io`] (or transport-specific variants) for real failures.
    async fn fetch(&self, name: &str, level: Level) -> Result<Vec<u8>>;
}

/// Tile source reading `.dtN` files from a base directory.
///
/// Besides plain files, a gzip-compressed sibling (`<path>.gz`) and a zip
/// archive sibling (`<path>.zip`, containing the tile as its sole `.dtN`
/// entry) are recognized, so tile sets can be stored compressed.
///
/// # Example
///
/// ```ignore
/// use dted::{FileTileSource, Terrain};
///
/// let terrain = Terrain::new(FileTileSource::new("/data/dted"));
/// let altitude = terrain.get_altitude_at(53.5, 8.5).await?;
/// ```
pub struct FileTileSource {
    base_dir: PathBuf,
}

impl FileTileSource {
    /// Create a source rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// The base directory containing the tile files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn not_found(&self, name: &str, level: Level) -> DtedError {
        DtedError::TileNotFound {
            name: name.to_string(),
            level,
        }
    }
}

#[async_trait]
impl TileSource for FileTileSource {
    async fn fetch(&self, name: &str, level: Level) -> Result<Vec<u8>> {
        let path = self.base_dir.join(format!("{}.{}", name, level.suffix()));

        match tokio::fs::read(&path).await {
            Ok(bytes) => return Ok(bytes),
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
            Err(_) => {}
        }

        let gz_path = append_extension(&path, "gz");
        match tokio::fs::read(&gz_path).await {
            Ok(compressed) => return gunzip(&compressed),
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
            Err(_) => {}
        }

        let zip_path = append_extension(&path, "zip");
        match tokio::fs::read(&zip_path).await {
            Ok(archive) => extract_from_zip(&archive, level)
                .ok_or_else(|| self.not_found(name, level)),
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            Err(_) => Err(self.not_found(name, level)),
        }
    }
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Decompress a gzip-compressed tile file.
pub(crate) fn gunzip(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = flate2::read::GzDecoder::new(compressed);
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Pull the first `.dtN` entry of the right level out of a zip archive.
pub(crate) fn extract_from_zip(archive: &[u8], level: Level) -> Option<Vec<u8>> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(archive)).ok()?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).ok()?;
        if entry.name().ends_with(level.suffix()) {
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes).ok()?;
            return Some(bytes);
        }
    }

    None
}
