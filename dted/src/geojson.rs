//! GeoJSON altitude enrichment.
//!
//! This module adds terrain altitudes to GeoJSON geometries. Enable the
//! `geojson` feature to use it.
//!
//! Positions arrive in GeoJSON order, `[longitude, latitude]` or
//! `[longitude, latitude, altitude]`; each gets its third coordinate set to
//! the interpolated terrain altitude. The enrichment is total: coverage gaps
//! read as `0.0`, matching [`Terrain::get_interpolated_altitude_at`].
//!
//! # Example
//!
//! ```ignore
//! use dted::{FileTileSource, Terrain};
//! use dted::geojson::add_altitudes_to_geometry;
//! use geojson::Geometry;
//!
//! let terrain = Terrain::new(FileTileSource::new("/data/dted"));
//!
//! let point: Geometry = r#"{"type": "Point", "coordinates": [8.5, 53.5]}"#
//!     .parse()
//!     .unwrap();
//!
//! let enriched = add_altitudes_to_geometry(&terrain, point).await;
//! // {"type": "Point", "coordinates": [8.5, 53.5, 1.0]}
//! ```

use std::future::Future;
use std::pin::Pin;

use geojson::{Geometry, Value as GeoJsonValue};

use crate::terrain::Terrain;

/// Add interpolated altitudes to every position of a GeoJSON geometry.
///
/// Supports all geometry types, including nested `GeometryCollection`s.
/// Positions with fewer than two elements are left untouched.
pub fn add_altitudes_to_geometry<'a>(
    terrain: &'a Terrain,
    geometry: Geometry,
) -> Pin<Box<dyn Future<Output = Geometry> + Send + 'a>> {
    Box::pin(async move {
        let value = match geometry.value {
            GeoJsonValue::Point(mut position) => {
                elevate_position(terrain, &mut position).await;
                GeoJsonValue::Point(position)
            }
            GeoJsonValue::MultiPoint(mut positions) => {
                elevate_positions(terrain, &mut positions).await;
                GeoJsonValue::MultiPoint(positions)
            }
            GeoJsonValue::LineString(mut positions) => {
                elevate_positions(terrain, &mut positions).await;
                GeoJsonValue::LineString(positions)
            }
            GeoJsonValue::MultiLineString(mut lines) => {
                for line in &mut lines {
                    elevate_positions(terrain, line).await;
                }
                GeoJsonValue::MultiLineString(lines)
            }
            GeoJsonValue::Polygon(mut rings) => {
                for ring in &mut rings {
                    elevate_positions(terrain, ring).await;
                }
                GeoJsonValue::Polygon(rings)
            }
            GeoJsonValue::MultiPolygon(mut polygons) => {
                for polygon in &mut polygons {
                    for ring in polygon.iter_mut() {
                        elevate_positions(terrain, ring).await;
                    }
                }
                GeoJsonValue::MultiPolygon(polygons)
            }
            GeoJsonValue::GeometryCollection(geometries) => {
                let mut enriched = Vec::with_capacity(geometries.len());
                for geometry in geometries {
                    enriched.push(add_altitudes_to_geometry(terrain, geometry).await);
                }
                GeoJsonValue::GeometryCollection(enriched)
            }
        };

        Geometry::new(value)
    })
}

/// Set a position's third coordinate to the interpolated terrain altitude.
async fn elevate_position(terrain: &Terrain, position: &mut Vec<f64>) {
    if position.len() < 2 {
        return;
    }

    let lon = position[0];
    let lat = position[1];
    let altitude = terrain.get_interpolated_altitude_at(lat, lon).await;

    if position.len() == 2 {
        position.push(altitude);
    } else {
        position[2] = altitude;
    }
}

async fn elevate_positions(terrain: &Terrain, positions: &mut [Vec<f64>]) {
    for position in positions.iter_mut() {
        elevate_position(terrain, position).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileTileSource;
    use crate::tile::fixtures::reference_tile_bytes;
    use tempfile::TempDir;

    fn terrain_over_fixture() -> (Terrain, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let tile_dir = temp_dir.path().join("e008");
        std::fs::create_dir_all(&tile_dir).unwrap();
        std::fs::write(tile_dir.join("n53.dt0"), reference_tile_bytes()).unwrap();

        let terrain = Terrain::new(FileTileSource::new(temp_dir.path()));
        (terrain, temp_dir)
    }

    #[tokio::test]
    async fn test_point_enrichment() {
        let (terrain, _dir) = terrain_over_fixture();

        let geometry = Geometry::new(GeoJsonValue::Point(vec![8.5, 53.5]));
        let result = add_altitudes_to_geometry(&terrain, geometry).await;

        match result.value {
            GeoJsonValue::Point(position) => {
                assert_eq!(position, vec![8.5, 53.5, 1.0]);
            }
            other => panic!("expected Point, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_point_outside_coverage_reads_zero() {
        let (terrain, _dir) = terrain_over_fixture();

        let geometry = Geometry::new(GeoJsonValue::Point(vec![13.0, 13.0]));
        let result = add_altitudes_to_geometry(&terrain, geometry).await;

        match result.value {
            GeoJsonValue::Point(position) => assert_eq!(position[2], 0.0),
            other => panic!("expected Point, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_linestring_enrichment() {
        let (terrain, _dir) = terrain_over_fixture();

        let geometry = Geometry::new(GeoJsonValue::LineString(vec![
            vec![8.5, 53.5],
            vec![8.0, 53.0],
        ]));
        let result = add_altitudes_to_geometry(&terrain, geometry).await;

        match result.value {
            GeoJsonValue::LineString(positions) => {
                assert_eq!(positions[0][2], 1.0);
                assert_eq!(positions[1][2], 7.0);
            }
            other => panic!("expected LineString, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_existing_third_coordinate_replaced() {
        let (terrain, _dir) = terrain_over_fixture();

        let geometry = Geometry::new(GeoJsonValue::Point(vec![8.5, 53.5, 9999.0]));
        let result = add_altitudes_to_geometry(&terrain, geometry).await;

        match result.value {
            GeoJsonValue::Point(position) => assert_eq!(position[2], 1.0),
            other => panic!("expected Point, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_geometry_collection() {
        let (terrain, _dir) = terrain_over_fixture();

        let geometry = Geometry::new(GeoJsonValue::GeometryCollection(vec![
            Geometry::new(GeoJsonValue::Point(vec![8.5, 53.5])),
            Geometry::new(GeoJsonValue::Polygon(vec![vec![
                vec![8.0, 53.0],
                vec![8.5, 53.0],
                vec![8.5, 53.5],
                vec![8.0, 53.0],
            ]])),
        ]));
        let result = add_altitudes_to_geometry(&terrain, geometry).await;

        match result.value {
            GeoJsonValue::GeometryCollection(geometries) => {
                assert_eq!(geometries.len(), 2);
                match &geometries[1].value {
                    GeoJsonValue::Polygon(rings) => {
                        for position in &rings[0] {
                            assert_eq!(position.len(), 3);
                        }
                    }
                    other => panic!("expected Polygon, got {:?}", other),
                }
            }
            other => panic!("expected GeometryCollection, got {:?}", other),
        }
    }
}
