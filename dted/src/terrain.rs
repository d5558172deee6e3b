//! Terrain query engine with tile caching and tiered-precision fallback.
//!
//! [`Terrain`] composes the namer, a [`TileSource`] and a per-engine tile
//! cache into whole-earth point elevation queries. Each engine instance owns
//! its own cache, so multiple engines with independent caches can coexist in
//! one process.
//!
//! # Example
//!
//! ```ignore
//! use dted::{FileTileSource, Terrain};
//!
//! let terrain = Terrain::new(FileTileSource::new("/data/dted"));
//!
//! // Nearest-post altitude; None means no tile covers the point
//! if let Some(altitude) = terrain.get_altitude_at(53.5, 8.5).await? {
//!     println!("Altitude: {}m", altitude);
//! }
//!
//! // Interpolated altitude; coverage gaps read as sea level
//! let altitude = terrain.get_interpolated_altitude_at(53.50415, 8.55833).await;
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::future::Cache;

use crate::error::{DtedError, Result};
use crate::name::tile_name;
use crate::source::{FileTileSource, Level, TileSource};
use crate::tile::Tile;

#[cfg(feature = "download")]
use crate::download::HttpTileSource;

/// Statistics about tile cache usage.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of resolved entries currently in the cache (present or absent).
    pub entry_count: u64,
    /// Number of queries served from the cache.
    pub hit_count: u64,
    /// Number of queries that had to go to the tile source.
    pub miss_count: u64,
}

impl CacheStats {
    /// Calculate the cache hit rate (0.0 to 1.0).
    ///
    /// Returns 0.0 if no queries have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}

/// Terrain engine answering point elevation queries.
///
/// Tiles resolve through the source at descending precision levels
/// (2 → 1 → 0); the first level that yields decodable bytes wins. A name
/// whose every level fails (not found, I/O error or corrupt tile alike) is
/// cached as absent, so a sparse or damaged tile set is probed at most once
/// per name. Entries, present and absent, live for the engine's lifetime:
/// elevation tiles are immutable reference data, so there is no eviction and
/// no refresh.
///
/// Concurrent queries for the same unresolved name are coalesced into a
/// single in-flight fetch by the cache's atomic entry initialization.
pub struct Terrain {
    source: Arc<dyn TileSource>,
    tiles: Cache<String, Option<Arc<Tile>>>,
    hit_count: AtomicU64,
    miss_count: AtomicU64,
}

impl Terrain {
    /// Create an engine over the given tile source.
    pub fn new(source: impl TileSource + 'static) -> Self {
        Self::with_source(Arc::new(source))
    }

    /// Create an engine over a shared tile source.
    pub fn with_source(source: Arc<dyn TileSource>) -> Self {
        Self {
            source,
            tiles: Cache::builder().build(),
            hit_count: AtomicU64::new(0),
            miss_count: AtomicU64::new(0),
        }
    }

    /// Create a builder for more configuration options.
    pub fn builder() -> TerrainBuilder {
        TerrainBuilder::new()
    }

    /// Canonical tile name for the given coordinates, e.g. `e008/n53`.
    pub fn make_tile_name(&self, lat: f64, lon: f64) -> String {
        tile_name(lat, lon)
    }

    /// Fetch the tile covering the given coordinates.
    ///
    /// Returns `None` when no tile exists at any precision level; the
    /// absence itself is cached, so repeated queries into a coverage gap do
    /// not re-probe the source.
    pub async fn fetch_tile_at(&self, lat: f64, lon: f64) -> Option<Arc<Tile>> {
        let name = tile_name(lat, lon);
        let entry = self
            .tiles
            .entry(name.clone())
            .or_insert_with(self.resolve(name))
            .await;

        if entry.is_fresh() {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
        }

        entry.into_value()
    }

    /// Try each precision level in descending order; decode failures fall
    /// through to the next level just like missing tiles, so one corrupt
    /// high-resolution file cannot mask a usable coarse one.
    async fn resolve(&self, name: String) -> Option<Arc<Tile>> {
        for level in Level::DESCENDING {
            match self.source.fetch(&name, level).await {
                Ok(bytes) => match Tile::decode(&bytes) {
                    Ok(tile) => return Some(Arc::new(tile)),
                    Err(_) => continue,
                },
                Err(_) => continue,
            }
        }
        None
    }

    /// Altitude of the post nearest to the given coordinates.
    ///
    /// Returns `Ok(None)` when no tile covers the point at any precision
    /// level. A present tile yields the literal stored elevation, which may
    /// be [`crate::VOID_VALUE`].
    ///
    /// # Errors
    ///
    /// [`DtedError::OutOfBounds`] for non-finite coordinates or coordinates
    /// outside ±90° latitude / ±180° longitude.
    pub async fn get_altitude_at(&self, lat: f64, lon: f64) -> Result<Option<i16>> {
        validate_coordinates(lat, lon)?;

        match self.fetch_tile_at(lat, lon).await {
            Some(tile) => tile.altitude_at(lat, lon).map(Some),
            None => Ok(None),
        }
    }

    /// Bilinearly interpolated altitude at the given coordinates.
    ///
    /// Total: coverage gaps, invalid coordinates and edge lookups outside
    /// the grid all read as `0.0` (sea level) rather than failing the
    /// caller. Bulk terrain sampling over sparse tile sets relies on this.
    pub async fn get_interpolated_altitude_at(&self, lat: f64, lon: f64) -> f64 {
        if validate_coordinates(lat, lon).is_err() {
            return 0.0;
        }

        match self.fetch_tile_at(lat, lon).await {
            Some(tile) => tile.interpolated_altitude_at(lat, lon).unwrap_or(0.0),
            None => 0.0,
        }
    }

    /// Interpolated altitudes for a batch of coordinates.
    ///
    /// Coordinates are grouped by tile name so each tile resolves once
    /// regardless of how many points fall within it. Coverage gaps and
    /// invalid coordinates yield `default`.
    pub async fn get_altitudes_batch(&self, coords: &[(f64, f64)], default: f64) -> Vec<f64> {
        let mut results = vec![default; coords.len()];

        // Group coordinate indices by tile name
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, &(lat, lon)) in coords.iter().enumerate() {
            if validate_coordinates(lat, lon).is_err() {
                continue;
            }
            groups.entry(tile_name(lat, lon)).or_default().push(i);
        }

        // One tile resolution per group, however many coords it carries
        for indices in groups.values() {
            let (lat, lon) = coords[indices[0]];
            let tile = match self.fetch_tile_at(lat, lon).await {
                Some(tile) => tile,
                None => continue,
            };

            for &i in indices {
                let (lat, lon) = coords[i];
                if let Some(altitude) = tile.interpolated_altitude_at(lat, lon) {
                    results[i] = altitude;
                }
            }
        }

        results
    }

    /// Get cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.tiles.entry_count(),
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
        }
    }
}

fn validate_coordinates(lat: f64, lon: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(DtedError::OutOfBounds { lat, lon });
    }
    Ok(())
}

/// Builder for creating [`Terrain`] with custom configuration.
///
/// # Example
///
/// ```ignore
/// use dted::TerrainBuilder;
///
/// let terrain = TerrainBuilder::new()
///     .data_dir("/data/dted")
///     .build()?;
/// ```
#[derive(Default)]
pub struct TerrainBuilder {
    data_dir: Option<PathBuf>,
    #[cfg(feature = "download")]
    download_url: Option<String>,
}

impl TerrainBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder configured from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `DTED_DATA_DIR` | Directory containing `.dtN` tile files (required) |
    /// | `DTED_DOWNLOAD_URL` | URL template for remote tiles (`download` feature) |
    ///
    /// # Errors
    ///
    /// Returns an error if `DTED_DATA_DIR` is not set.
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("DTED_DATA_DIR").map_err(|_| {
            DtedError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "DTED_DATA_DIR environment variable not set",
            ))
        })?;

        #[allow(unused_mut)]
        let mut builder = Self::new().data_dir(data_dir);

        #[cfg(feature = "download")]
        if let Ok(url) = std::env::var("DTED_DOWNLOAD_URL") {
            builder = builder.download_url(url);
        }

        Ok(builder)
    }

    /// Set the directory containing `.dtN` tile files.
    pub fn data_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    /// Fetch tiles over HTTP from a URL template instead of the filesystem.
    ///
    /// The template may use `{name}` and `{level}` placeholders, e.g.
    /// `https://example.com/dted/{name}.{level}`.
    #[cfg(feature = "download")]
    pub fn download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// Build the [`Terrain`] engine.
    ///
    /// # Errors
    ///
    /// Returns an error if neither a data directory nor a download URL was
    /// configured, or if the HTTP client cannot be created.
    pub fn build(self) -> Result<Terrain> {
        #[cfg(feature = "download")]
        if let Some(url) = self.download_url {
            return Ok(Terrain::new(HttpTileSource::new(url)?));
        }

        let data_dir = self.data_dir.ok_or_else(|| {
            DtedError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no data directory configured",
            ))
        })?;

        Ok(Terrain::new(FileTileSource::new(data_dir)))
    }
}
