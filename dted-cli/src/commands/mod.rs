use anyhow::{Context, Result};
use dted::{Terrain, TerrainBuilder};
use std::path::PathBuf;

pub mod batch;
pub mod info;
pub mod list;
pub mod query;

/// Build the terrain engine shared by the query-style commands.
pub(crate) fn build_terrain(
    data_dir: Option<PathBuf>,
    download_url: Option<String>,
) -> Result<Terrain> {
    let mut builder = match data_dir {
        Some(dir) => TerrainBuilder::new().data_dir(dir),
        None => TerrainBuilder::from_env().context(
            "DTED_DATA_DIR environment variable not set. Use --data-dir or set DTED_DATA_DIR",
        )?,
    };

    if let Some(url) = download_url {
        builder = builder.download_url(url);
    }

    builder.build().context("Failed to create terrain engine")
}

/// Resolve the data directory for commands that read it directly.
pub(crate) fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    match data_dir {
        Some(dir) => Ok(dir),
        None => {
            let dir = std::env::var("DTED_DATA_DIR").context(
                "DTED_DATA_DIR environment variable not set. Use --data-dir or set DTED_DATA_DIR",
            )?;
            Ok(PathBuf::from(dir))
        }
    }
}

pub(crate) fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
