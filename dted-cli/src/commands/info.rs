use anyhow::{Context, Result};
use dted::{tile_name, Level, Tile, VOID_VALUE};
use std::path::{Path, PathBuf};

pub fn run(
    data_dir: Option<PathBuf>,
    tile: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<()> {
    // Determine the tile file to inspect
    let (name, path) = if let (Some(lat), Some(lon)) = (lat, lon) {
        let name = tile_name(lat, lon);
        let dir = super::resolve_data_dir(data_dir)?;
        let path = find_tile_file(&dir, &name)
            .with_context(|| format!("Tile {} not found in {}", name, dir.display()))?;
        (name, path)
    } else {
        let tile = tile.context("Provide a tile name, a file path, or --lat/--lon")?;
        let as_path = PathBuf::from(&tile);
        let has_level_extension = as_path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Level::from_suffix)
            .is_some();

        if has_level_extension && as_path.exists() {
            // Full path provided
            (tile.clone(), as_path)
        } else {
            // Just a tile name (e.g. "e008/n53")
            let dir = super::resolve_data_dir(data_dir)?;
            let path = find_tile_file(&dir, &tile)
                .with_context(|| format!("Tile {} not found in {}", tile, dir.display()))?;
            (tile, path)
        }
    };

    let level = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Level::from_suffix);

    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_size = bytes.len() as u64;

    let tile = Tile::decode(&bytes).context("Failed to decode tile")?;
    let cell = tile.cell_data();

    // Elevation range and void share across the whole grid
    let (mut min_alt, mut max_alt) = (i16::MAX, i16::MIN);
    let mut void_count = 0u64;
    for lat_index in 0..tile.lat_count() {
        for lon_index in 0..tile.lon_count() {
            match tile.altitude_at_index(lat_index as isize, lon_index as isize) {
                Some(VOID_VALUE) => void_count += 1,
                Some(altitude) => {
                    min_alt = min_alt.min(altitude);
                    max_alt = max_alt.max(altitude);
                }
                None => {}
            }
        }
    }

    // Display information
    println!("Tile: {}", name);
    println!("Path: {}", path.display());
    println!();
    if let Some(level) = level {
        println!(
            "Level: {} ({}\" posts, ~{:.0}m)",
            level,
            level.arc_seconds(),
            level.meters()
        );
    }
    println!(
        "Grid: {} x {} posts (lat x lon)",
        tile.lat_count(),
        tile.lon_count()
    );
    println!(
        "Coverage: ({}, {}) to ({}, {})",
        cell.lat_of_origin, cell.lon_of_origin, cell.lat_of_corner, cell.lon_of_corner
    );
    println!(
        "Post spacing: {:.1}\" lat, {:.1}\" lon",
        cell.lat_interval * 3600.0,
        cell.lon_interval * 3600.0
    );
    println!("File size: {}", super::format_size(file_size));
    println!();

    if min_alt <= max_alt {
        println!("Min altitude: {}m", min_alt);
        println!("Max altitude: {}m", max_alt);
    }

    let total_posts = (tile.lat_count() * tile.lon_count()) as u64;
    if void_count > 0 {
        let void_pct = (void_count as f64 / total_posts as f64) * 100.0;
        println!("Void posts: {} ({:.1}%)", void_count, void_pct);
    }

    Ok(())
}

fn find_tile_file(dir: &Path, name: &str) -> Option<PathBuf> {
    for level in Level::DESCENDING {
        let path = dir.join(format!("{}.{}", name, level.suffix()));
        if path.exists() {
            return Some(path);
        }
    }
    None
}
