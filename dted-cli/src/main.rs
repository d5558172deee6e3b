use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// DTED elevation data CLI tool
#[derive(Parser)]
#[command(name = "dted")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing .dtN tile files
    #[arg(short, long, env = "DTED_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// URL template for fetching tiles over HTTP (e.g. "https://example.com/{name}.{level}")
    #[arg(short = 'u', long, env = "DTED_DOWNLOAD_URL", global = true)]
    download_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query altitude for a single coordinate
    Query {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Use bilinear interpolation for sub-post accuracy
        #[arg(short, long)]
        interpolate: bool,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Process altitudes for multiple coordinates from a file
    Batch {
        /// Input file (CSV or GeoJSON)
        input: PathBuf,

        /// Output file (same format as input if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name for latitude (CSV only)
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude (CSV only)
        #[arg(long, default_value = "lon")]
        lon_col: String,

        /// Use bilinear interpolation
        #[arg(short, long)]
        interpolate: bool,
    },

    /// Display information about a DTED tile
    Info {
        /// Tile name (e.g. e008/n53) or path to a .dtN file
        tile: Option<String>,

        /// Specify tile by latitude instead of name
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Specify tile by longitude instead of name
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },

    /// List available DTED tiles
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            lat,
            lon,
            interpolate,
            json,
        } => {
            commands::query::run(cli.data_dir, cli.download_url, lat, lon, interpolate, json)
                .await
        }
        Commands::Batch {
            input,
            output,
            lat_col,
            lon_col,
            interpolate,
        } => {
            commands::batch::run(
                cli.data_dir,
                cli.download_url,
                input,
                output,
                lat_col,
                lon_col,
                interpolate,
            )
            .await
        }
        Commands::Info { tile, lat, lon } => commands::info::run(cli.data_dir, tile, lat, lon),
        Commands::List => commands::list::run(cli.data_dir),
    }
}
