//! # DTED Terrain Library
//!
//! Library for decoding DTED (Digital Terrain Elevation Data) tiles and
//! answering whole-earth point elevation queries with per-engine tile
//! caching and tiered-precision fallback.
//!
//! ## Features
//!
//! - **Validated decoding**: every data record's checksum is recomputed;
//!   corrupt tiles are rejected whole, never half-read
//! - **Tiered fallback**: queries try level 2, then 1, then 0, because real
//!   tile sets are sparse at high resolution and dense at coarse resolution
//! - **Memoized coverage gaps**: a name with no tile at any level is cached
//!   as absent and never probed again
//! - **Pluggable storage**: filesystem and HTTP sources out of the box, any
//!   backend via the [`TileSource`] trait
//!
//! ## Quick Start
//!
//! ```ignore
//! use dted::{name, FileTileSource, Terrain, Tile};
//!
//! // Determine which tile covers a coordinate
//! assert_eq!(name::tile_name(53.5, 8.125), "e008/n53");
//!
//! // Query through the engine (loads and caches tiles on demand)
//! let terrain = Terrain::new(FileTileSource::new("/data/dted"));
//! let altitude = terrain.get_altitude_at(53.5, 8.5).await?;
//! let smooth = terrain.get_interpolated_altitude_at(53.50415, 8.55833).await;
//! ```
//!
//! ## DTED Data Format
//!
//! A DTED file is an 80-byte User Header Label, a 648-byte Data Set
//! Identification record and a 2700-byte Accuracy record, followed by one
//! data record per longitude line. Each data record carries its posts as
//! 16-bit big-endian sign-and-magnitude integers (meters) plus a 32-bit
//! checksum over the record's bytes. The value -32767 marks a void (no
//! data) post.
//!
//! Post spacing depends on the precision level (30″/3″/1″ of latitude for
//! levels 0/1/2) and widens along longitude in high-latitude bands, so a
//! one-degree cell is always a fixed grid but not a square one.
//!
//! ## Data Sources
//!
//! DTED level 0 is published freely; higher levels come from national
//! mapping agencies. Any HTTP mirror can be addressed with the `download`
//! feature's URL-template source.

pub mod error;
pub mod name;
pub mod source;
pub mod terrain;
pub mod tile;

#[cfg(feature = "download")]
pub mod download;

#[cfg(feature = "geojson")]
pub mod geojson;

// Re-export main types at crate root for convenience
pub use error::{DtedError, Result};
pub use name::{parse_tile_name, tile_name};
pub use source::{FileTileSource, Level, TileSource};
pub use terrain::{CacheStats, Terrain, TerrainBuilder};
pub use tile::{CellData, Tile, VOID_VALUE};

#[cfg(feature = "download")]
pub use download::HttpTileSource;
