//! Example demonstrating bilinear interpolation for smoother altitude queries.
//!
//! Run with: cargo run --example interpolation -- /path/to/dted/files

use dted::{FileTileSource, Terrain};
use std::env;

#[tokio::main]
async fn main() -> dted::Result<()> {
    let data_dir = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example interpolation -- /path/to/dted/files");
        std::process::exit(1);
    });

    let terrain = Terrain::new(FileTileSource::new(&data_dir));

    // Compare nearest-post vs interpolated altitude
    let lat = 53.50415;
    let lon = 8.55833;

    println!("Comparing altitude methods at ({}, {}):", lat, lon);
    println!("{:-<50}", "");

    match terrain.get_altitude_at(lat, lon).await? {
        Some(altitude) => println!("Nearest post: {}m", altitude),
        None => {
            println!("No tile covers this point");
            return Ok(());
        }
    }

    // Interpolation never fails; coverage gaps read as sea level
    let altitude = terrain.get_interpolated_altitude_at(lat, lon).await;
    println!("Interpolated: {:.2}m", altitude);

    Ok(())
}
