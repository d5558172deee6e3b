//! Basic example demonstrating dted library usage.
//!
//! Run with: cargo run --example basic -- /path/to/dted/files

use dted::{FileTileSource, Terrain, VOID_VALUE};
use std::env;

#[tokio::main]
async fn main() -> dted::Result<()> {
    // Get data directory from command line
    let data_dir = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example basic -- /path/to/dted/files");
        std::process::exit(1);
    });

    let terrain = Terrain::new(FileTileSource::new(&data_dir));

    // Query some locations
    let locations = [
        ("Bremerhaven, Germany", 53.5, 8.58),
        ("Mount Fuji, Japan", 35.3606, 138.7274),
        ("Denali, Alaska", 63.0695, -151.0074),
    ];

    println!("Elevation queries (nearest post):");
    println!("{:-<50}", "");

    for (name, lat, lon) in &locations {
        match terrain.get_altitude_at(*lat, *lon).await? {
            Some(VOID_VALUE) => println!("{}: void (no measurement)", name),
            Some(altitude) => println!("{}: {}m", name, altitude),
            None => println!("{}: no tile available locally", name),
        }
    }

    // Show cache statistics
    let stats = terrain.cache_stats();
    println!("\nCache statistics:");
    println!("  Resolved names: {}", stats.entry_count);
    println!("  Hits: {}", stats.hit_count);
    println!("  Misses: {}", stats.miss_count);
    println!("  Hit rate: {:.1}%", stats.hit_rate() * 100.0);

    Ok(())
}
