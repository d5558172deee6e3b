use anyhow::Result;
use dted::VOID_VALUE;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct AltitudeResponse {
    lat: f64,
    lon: f64,
    altitude: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    interpolated: bool,
}

pub async fn run(
    data_dir: Option<PathBuf>,
    download_url: Option<String>,
    lat: f64,
    lon: f64,
    interpolate: bool,
    json: bool,
) -> Result<()> {
    let terrain = super::build_terrain(data_dir, download_url)?;

    // Query altitude
    let (altitude, note) = if interpolate {
        let altitude = terrain.get_interpolated_altitude_at(lat, lon).await;
        (Some(altitude), None)
    } else {
        match terrain.get_altitude_at(lat, lon).await? {
            Some(VOID_VALUE) => (None, Some("void")),
            Some(altitude) => (Some(f64::from(altitude)), None),
            None => (None, Some("no tile")),
        }
    };

    // Output result
    if json {
        let response = AltitudeResponse {
            lat,
            lon,
            altitude,
            interpolated: interpolate,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else if let Some(note) = note {
        println!("{}", note);
    } else if let Some(altitude) = altitude {
        if interpolate {
            println!("{:.2}", altitude);
        } else {
            println!("{}", altitude as i16);
        }
    }

    Ok(())
}
