//! HTTP request handlers for the elevation service.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use dted::VOID_VALUE;

use crate::AppState;

/// Query parameters for the elevation endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AltitudeQuery {
    /// Latitude in decimal degrees (-90 to 90).
    pub lat: f64,
    /// Longitude in decimal degrees (-180 to 180).
    pub lon: f64,
    /// Whether to use bilinear interpolation for sub-post accuracy.
    /// When true, the response is a floating-point altitude and coverage
    /// gaps read as 0.0. Default is false (nearest-post lookup).
    #[serde(default)]
    pub interpolate: bool,
}

/// Successful altitude response (nearest-post lookup).
#[derive(Debug, Serialize, ToSchema)]
pub struct AltitudeResponse {
    /// Altitude in meters (integer, nearest-post lookup).
    pub altitude: i16,
    /// Latitude queried.
    pub lat: f64,
    /// Longitude queried.
    pub lon: f64,
}

/// Successful interpolated altitude response.
#[derive(Debug, Serialize, ToSchema)]
pub struct InterpolatedAltitudeResponse {
    /// Altitude in meters (floating-point, bilinear interpolation).
    pub altitude: f64,
    /// Latitude queried.
    pub lat: f64,
    /// Longitude queried.
    pub lon: f64,
    /// Whether interpolation was used.
    pub interpolated: bool,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Cache statistics response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of resolved tile names in the cache (present or absent).
    pub cached_tiles: u64,
    /// Cache hit count.
    pub cache_hits: u64,
    /// Cache miss count.
    pub cache_misses: u64,
    /// Cache hit rate (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Get altitude for given coordinates.
///
/// With `interpolate=true` the response is always `200 OK` and coverage gaps
/// read as altitude 0.0. The nearest-post form instead reports
/// missing coverage and void posts as `404 Not Found`.
#[utoipa::path(
    get,
    path = "/elevation",
    params(AltitudeQuery),
    responses(
        (status = 200, description = "Altitude found", body = AltitudeResponse),
        (status = 400, description = "Invalid coordinates", body = ErrorResponse),
        (status = 404, description = "No tile covers the point", body = ErrorResponse),
    ),
    tag = "elevation"
)]
#[axum::debug_handler]
pub async fn get_altitude(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AltitudeQuery>,
) -> impl IntoResponse {
    tracing::debug!(
        lat = query.lat,
        lon = query.lon,
        interpolate = query.interpolate,
        "Altitude query"
    );

    if query.interpolate {
        // Total: absent tiles and edge conditions read as sea level
        let altitude = state
            .terrain
            .get_interpolated_altitude_at(query.lat, query.lon)
            .await;

        tracing::info!(
            lat = query.lat,
            lon = query.lon,
            altitude = altitude,
            interpolated = true,
            "Altitude found"
        );
        (
            StatusCode::OK,
            Json(InterpolatedAltitudeResponse {
                altitude,
                lat: query.lat,
                lon: query.lon,
                interpolated: true,
            }),
        )
            .into_response()
    } else {
        match state.terrain.get_altitude_at(query.lat, query.lon).await {
            Ok(Some(altitude)) if altitude != VOID_VALUE => {
                tracing::info!(
                    lat = query.lat,
                    lon = query.lon,
                    altitude = altitude,
                    "Altitude found"
                );
                (
                    StatusCode::OK,
                    Json(AltitudeResponse {
                        altitude,
                        lat: query.lat,
                        lon: query.lon,
                    }),
                )
                    .into_response()
            }
            Ok(Some(_)) => not_found(query.lat, query.lon, "void post (no measurement)"),
            Ok(None) => not_found(query.lat, query.lon, "no tile at any precision level"),
            Err(e) => error_response(query.lat, query.lon, e),
        }
    }
}

/// Enrich a GeoJSON geometry with interpolated altitudes.
///
/// Accepts any GeoJSON geometry and returns it with every position's third
/// coordinate set to the interpolated terrain altitude (coverage gaps read
/// as 0.0).
#[utoipa::path(
    post,
    path = "/elevation",
    request_body(
        description = "A GeoJSON geometry object",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Enriched GeoJSON geometry"),
        (status = 422, description = "Body is not a GeoJSON geometry"),
    ),
    tag = "elevation"
)]
pub async fn post_altitude(
    State(state): State<Arc<AppState>>,
    Json(geometry): Json<geojson::Geometry>,
) -> impl IntoResponse {
    let enriched = dted::geojson::add_altitudes_to_geometry(&state.terrain, geometry).await;
    (StatusCode::OK, Json(enriched)).into_response()
}

fn not_found(lat: f64, lon: f64, reason: &str) -> axum::response::Response {
    tracing::info!(lat = lat, lon = lon, reason = reason, "No altitude");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No altitude at lat={}, lon={}: {}", lat, lon, reason),
        }),
    )
        .into_response()
}

/// Create an error response for altitude queries.
fn error_response(lat: f64, lon: f64, e: dted::DtedError) -> axum::response::Response {
    let status = match &e {
        dted::DtedError::OutOfBounds { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    tracing::warn!(lat = lat, lon = lon, error = %e, "Altitude query failed");

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Get cache statistics.
#[utoipa::path(
    get,
    path = "/stats",
    responses((status = 200, description = "Tile cache statistics", body = StatsResponse)),
    tag = "system"
)]
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let stats = state.terrain.cache_stats();

    Json(StatsResponse {
        cached_tiles: stats.entry_count,
        cache_hits: stats.hit_count,
        cache_misses: stats.miss_count,
        hit_rate: stats.hit_rate(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_query_deserialize() {
        let json = r#"{"lat": 53.5, "lon": 8.125}"#;
        let query: AltitudeQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.lat, 53.5);
        assert_eq!(query.lon, 8.125);
        assert!(!query.interpolate);
    }

    #[test]
    fn test_altitude_response_serialize() {
        let response = AltitudeResponse {
            altitude: 1234,
            lat: 53.5,
            lon: 8.125,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("1234"));
        assert!(json.contains("53.5"));
    }

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("0.1.0"));
    }
}
