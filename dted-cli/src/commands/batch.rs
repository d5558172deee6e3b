use anyhow::{bail, Context, Result};
use dted::{Terrain, VOID_VALUE};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    data_dir: Option<PathBuf>,
    download_url: Option<String>,
    input: PathBuf,
    output: Option<PathBuf>,
    lat_col: String,
    lon_col: String,
    interpolate: bool,
) -> Result<()> {
    let terrain = super::build_terrain(data_dir, download_url)?;

    // Detect file format
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => process_csv(&terrain, &input, output, &lat_col, &lon_col, interpolate).await,
        "geojson" | "json" => process_geojson(&terrain, &input, output).await,
        _ => bail!(
            "Unsupported file format: {}. Use .csv or .geojson",
            extension
        ),
    }
}

async fn process_csv(
    terrain: &Terrain,
    input: &PathBuf,
    output: Option<PathBuf>,
    lat_col: &str,
    lon_col: &str,
    interpolate: bool,
) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let total = records.len() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    // Prepare output
    let output_path = output.unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        input.with_file_name(format!("{}_altitude.csv", stem))
    });
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    // Write header
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("altitude");
    writer.write_record(&new_headers)?;

    // Process records
    for record in records {
        let lat: f64 = record
            .get(lat_idx)
            .context("Missing latitude")?
            .parse()
            .context("Invalid latitude")?;
        let lon: f64 = record
            .get(lon_idx)
            .context("Missing longitude")?
            .parse()
            .context("Invalid longitude")?;

        let altitude = if interpolate {
            format!("{:.2}", terrain.get_interpolated_altitude_at(lat, lon).await)
        } else {
            match terrain.get_altitude_at(lat, lon).await {
                Ok(Some(VOID_VALUE)) => "void".to_string(),
                Ok(Some(altitude)) => altitude.to_string(),
                Ok(None) | Err(_) => "no tile".to_string(),
            }
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&altitude);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    println!("Output written to: {}", output_path.display());
    Ok(())
}

async fn process_geojson(terrain: &Terrain, input: &PathBuf, output: Option<PathBuf>) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let reader = BufReader::new(file);

    let geojson: geojson::GeoJson =
        serde_json::from_reader(reader).context("Failed to parse GeoJSON")?;

    let result = match geojson {
        geojson::GeoJson::Geometry(geometry) => {
            let enriched = dted::geojson::add_altitudes_to_geometry(terrain, geometry).await;
            geojson::GeoJson::Geometry(enriched)
        }
        geojson::GeoJson::Feature(mut feature) => {
            if let Some(geometry) = feature.geometry.take() {
                feature.geometry =
                    Some(dted::geojson::add_altitudes_to_geometry(terrain, geometry).await);
            }
            geojson::GeoJson::Feature(feature)
        }
        geojson::GeoJson::FeatureCollection(mut fc) => {
            let pb = ProgressBar::new(fc.features.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                    .progress_chars("#>-"),
            );

            for feature in &mut fc.features {
                if let Some(geometry) = feature.geometry.take() {
                    feature.geometry =
                        Some(dted::geojson::add_altitudes_to_geometry(terrain, geometry).await);
                }
                pb.inc(1);
            }
            pb.finish_with_message("done");
            geojson::GeoJson::FeatureCollection(fc)
        }
    };

    // Write output
    let output_path = output.unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        input.with_file_name(format!("{}_altitude.geojson", stem))
    });
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = BufWriter::new(output_file);
    serde_json::to_writer_pretty(&mut writer, &result)?;
    writer.flush()?;

    println!("Output written to: {}", output_path.display());
    Ok(())
}
