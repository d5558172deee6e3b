//! Tile naming utilities.
//!
//! This module converts between coordinates and canonical DTED tile names.
//!
//! # Name Format
//!
//! Tiles are named `<lon-part>/<lat-part>`, e.g. `e008/n53`:
//!
//! - Longitude: 3 digits with e/w prefix (e.g. `e008`, `w077`)
//! - Latitude: 2 digits with n/s prefix (e.g. `n53`, `s12`)
//!
//! The name addresses the **south-west corner** of the 1° × 1° cell, so the
//! magnitude is taken after flooring the coordinate: `(-53.5, -8.125)` floors
//! to `(-54, -9)` and names `w009/s54`. The hemisphere comparison is strictly
//! `> 0.0`, so exactly-zero coordinates take the `w`/`s` branch.

/// Convert latitude and longitude to the canonical tile name.
///
/// # Examples
///
/// ```
/// use dted::name::tile_name;
///
/// assert_eq!(tile_name(53.5, 8.125), "e008/n53");
/// assert_eq!(tile_name(-53.5, 8.125), "e008/s54");
/// assert_eq!(tile_name(-53.5, -8.125), "w009/s54");
/// assert_eq!(tile_name(53.5, -8.125), "w009/n53");
/// ```
pub fn tile_name(lat: f64, lon: f64) -> String {
    format!("{}/{}", lon_name(lon), lat_name(lat))
}

fn lon_name(lon: f64) -> String {
    let value = (lon.floor() as i32).abs();
    let prefix = if lon > 0.0 { 'e' } else { 'w' };
    format!("{}{:03}", prefix, value)
}

fn lat_name(lat: f64) -> String {
    let value = (lat.floor() as i32).abs();
    let prefix = if lat > 0.0 { 'n' } else { 's' };
    format!("{}{:02}", prefix, value)
}

/// Parse a tile name back to the floored (latitude, longitude) of its
/// south-west corner.
///
/// Accepts a bare name (`e008/n53`), a leading directory path, and an
/// optional `.dtN` extension.
///
/// # Examples
///
/// ```
/// use dted::name::parse_tile_name;
///
/// assert_eq!(parse_tile_name("e008/n53"), Some((53, 8)));
/// assert_eq!(parse_tile_name("w009/s54.dt1"), Some((-54, -9)));
/// assert_eq!(parse_tile_name("/data/dted/e008/n53.dt0"), Some((53, 8)));
/// assert_eq!(parse_tile_name("invalid"), None);
/// ```
pub fn parse_tile_name(name: &str) -> Option<(i32, i32)> {
    let mut parts = name.rsplit(['/', '\\']);
    let lat_part = parts.next()?;
    let lon_part = parts.next()?;

    // Strip a .dtN extension from the latitude segment if present
    let lat_part = lat_part.split('.').next()?;

    if lat_part.len() != 3 || lon_part.len() != 4 {
        return None;
    }

    let lat_sign = match lat_part.as_bytes()[0] {
        b'n' | b'N' => 1,
        b's' | b'S' => -1,
        _ => return None,
    };
    let lat: i32 = lat_part[1..3].parse().ok()?;

    let lon_sign = match lon_part.as_bytes()[0] {
        b'e' | b'E' => 1,
        b'w' | b'W' => -1,
        _ => return None,
    };
    let lon: i32 = lon_part[1..4].parse().ok()?;

    Some((lat * lat_sign, lon * lon_sign))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants() {
        assert_eq!(tile_name(53.5, 8.125), "e008/n53");
        assert_eq!(tile_name(-53.5, 8.125), "e008/s54");
        assert_eq!(tile_name(-53.5, -8.125), "w009/s54");
        assert_eq!(tile_name(53.5, -8.125), "w009/n53");
    }

    #[test]
    fn test_padding() {
        assert_eq!(tile_name(5.5, 5.5), "e005/n05");
        assert_eq!(tile_name(53.5, 122.4), "e122/n53");
        assert_eq!(tile_name(7.2, 0.5), "e000/n07");
    }

    #[test]
    fn test_floor_before_magnitude() {
        // floor(-0.5) = -1, so the western/southern neighbors are named
        assert_eq!(tile_name(-0.5, -0.5), "w001/s01");
        // floor(-53.0) = -53 exactly on the tile boundary
        assert_eq!(tile_name(-53.0, -8.0), "w008/s53");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(tile_name(59.9, 179.9), "e179/n59");
        assert_eq!(tile_name(-59.9, -179.9), "w180/s60");
    }

    #[test]
    fn test_parse_tile_name() {
        assert_eq!(parse_tile_name("e008/n53"), Some((53, 8)));
        assert_eq!(parse_tile_name("w009/s54"), Some((-54, -9)));
        assert_eq!(parse_tile_name("e000/n00"), Some((0, 0)));
        assert_eq!(parse_tile_name("w180/s60"), Some((-60, -180)));
    }

    #[test]
    fn test_parse_with_extension_and_path() {
        assert_eq!(parse_tile_name("e008/n53.dt0"), Some((53, 8)));
        assert_eq!(parse_tile_name("e008/n53.dt2"), Some((53, 8)));
        assert_eq!(parse_tile_name("/data/dted/w077/n35.dt1"), Some((35, -77)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_tile_name("invalid"), None);
        assert_eq!(parse_tile_name("e008"), None); // missing latitude part
        assert_eq!(parse_tile_name("x008/n53"), None); // bad prefix
        assert_eq!(parse_tile_name("e008/q53"), None); // bad prefix
        assert_eq!(parse_tile_name("e08/n53"), None); // too short
        assert_eq!(parse_tile_name("eaaa/n53"), None); // non-numeric
    }

    #[test]
    fn test_roundtrip() {
        let coords = [
            (53.5, 8.125),
            (-53.5, 8.125),
            (-53.5, -8.125),
            (53.5, -8.125),
            (0.5, 0.5),
            (-59.9, -179.9),
        ];

        for (lat, lon) in coords {
            let name = tile_name(lat, lon);
            let (parsed_lat, parsed_lon) = parse_tile_name(&name).unwrap();
            assert_eq!(parsed_lat, lat.floor() as i32);
            assert_eq!(parsed_lon, lon.floor() as i32);
        }
    }
}
