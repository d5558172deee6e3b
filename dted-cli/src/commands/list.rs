use anyhow::Result;
use dted::{parse_tile_name, Level};
use std::fs;
use std::path::PathBuf;

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let dir = super::resolve_data_dir(data_dir)?;

    if !dir.exists() {
        anyhow::bail!("Data directory does not exist: {}", dir.display());
    }

    // Tile names are nested one level deep: <dir>/e008/n53.dt0
    let mut tiles: Vec<(String, Level, u64)> = Vec::new();
    for entry in fs::read_dir(&dir)?.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let lon_part = entry.file_name().to_string_lossy().to_string();

        for tile_entry in fs::read_dir(entry.path())?.flatten() {
            let path = tile_entry.path();
            let level = match path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(Level::from_suffix)
            {
                Some(level) => level,
                None => continue,
            };
            let lat_part = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem,
                None => continue,
            };
            let size = tile_entry.metadata().map(|m| m.len()).unwrap_or(0);
            tiles.push((format!("{}/{}", lon_part, lat_part), level, size));
        }
    }

    if tiles.is_empty() {
        println!("No .dt0/.dt1/.dt2 files found in: {}", dir.display());
        return Ok(());
    }

    tiles.sort();

    let mut level_counts = [0u64; 3];
    let mut total_size: u64 = 0;

    println!("{:<12} {:>6} {:>24}", "TILE", "LEVEL", "COVERAGE");
    println!("{}", "-".repeat(46));

    for (name, level, size) in &tiles {
        total_size += size;
        level_counts[match level {
            Level::Level0 => 0,
            Level::Level1 => 1,
            Level::Level2 => 2,
        }] += 1;

        // Parse coverage from the tile name
        let coverage = if let Some((lat, lon)) = parse_tile_name(name) {
            let lat_prefix = if lat >= 0 { "n" } else { "s" };
            let lon_prefix = if lon >= 0 { "e" } else { "w" };
            format!(
                "{}{:02} to {}{:02}, {}{:03} to {}{:03}",
                lat_prefix,
                lat.abs(),
                lat_prefix,
                (lat + 1).abs(),
                lon_prefix,
                lon.abs(),
                lon_prefix,
                (lon + 1).abs()
            )
        } else {
            "Unknown".to_string()
        };

        println!("{:<12} {:>6} {:>24}", name, level.to_string(), coverage);
    }

    // Summary
    println!();
    println!("Summary:");
    println!("  Total tiles: {}", tiles.len());
    for (index, count) in level_counts.iter().enumerate() {
        if *count > 0 {
            println!("  Level {}: {}", index, count);
        }
    }
    println!("  Total size: {}", super::format_size(total_size));
    println!("  Data directory: {}", dir.display());

    Ok(())
}
