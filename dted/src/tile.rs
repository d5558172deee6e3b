//! DTED tile decoding and elevation extraction.
//!
//! This module provides the [`Tile`] struct, decoded from the raw bytes of a
//! DTED file (MIL-PRF-89020 layout): a fixed 80-byte User Header Label (UHL),
//! a 648-byte Data Set Identification record, a 2700-byte Accuracy record,
//! and one checksummed data record per longitude line.
//!
//! Elevations are 16-bit big-endian **sign-and-magnitude** values: the most
//! significant bit is the sign flag, the low 15 bits are the magnitude in
//! meters. They must not be read as two's complement or negative elevations
//! come out wrong by a wide margin.

use crate::error::{DtedError, Result};

/// Size of the User Header Label record.
const UHL_SIZE: usize = 80;

/// Size of the Data Set Identification record.
const DSI_SIZE: usize = 648;

/// Size of the Accuracy Description record.
const ACC_SIZE: usize = 2700;

/// Total header size preceding the first data record.
const HEADER_SIZE: usize = UHL_SIZE + DSI_SIZE + ACC_SIZE;

/// Recognition sentinel opening every data record.
const RECORD_SENTINEL: u8 = 0xAA;

/// Per-record bytes besides the elevations: sentinel (1), data block count
/// (3), longitude count (2), latitude count (2), checksum (4).
const RECORD_OVERHEAD: usize = 12;

/// Value indicating no data (void) in DTED files.
///
/// Encoded on the wire as `0xFFFF` (sign flag plus maximum magnitude) and
/// preserved verbatim in the decoded grid.
pub const VOID_VALUE: i16 = -32767;

/// Geographic footprint of a tile, derived on demand from its header fields.
///
/// The opposite corner is `origin + count × interval` rounded to the
/// whole-degree cell convention, so a 121-post, 30-arc-second tile at n53
/// reports a corner latitude of exactly 54.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellData {
    /// Latitude of the south-west corner in decimal degrees.
    pub lat_of_origin: f64,
    /// Longitude of the south-west corner in decimal degrees.
    pub lon_of_origin: f64,
    /// Latitude of the north-east corner in decimal degrees.
    pub lat_of_corner: f64,
    /// Longitude of the north-east corner in decimal degrees.
    pub lon_of_corner: f64,
    /// Degrees between adjacent posts along the latitude axis.
    pub lat_interval: f64,
    /// Degrees between adjacent posts along the longitude axis.
    pub lon_interval: f64,
}

/// A decoded DTED tile.
///
/// The grid is `lat_count × lon_count` posts, indexed `[lat][lon]` with row 0
/// at the origin latitude and column 0 at the origin longitude. A tile is
/// immutable once decoded; decoding either validates every data record
/// checksum or fails as a whole, so no partially-valid tile is ever produced.
///
/// # Example
///
/// ```ignore
/// use dted::Tile;
///
/// let bytes = std::fs::read("e008/n53.dt0")?;
/// let tile = Tile::decode(&bytes)?;
/// let elevation = tile.altitude_at(53.5, 8.5)?;
/// println!("Elevation: {}m", elevation);
/// ```
#[derive(Debug, Clone)]
pub struct Tile {
    lat_of_origin: f64,
    lon_of_origin: f64,
    lat_interval: f64,
    lon_interval: f64,
    lat_count: usize,
    lon_count: usize,
    /// Flat row-major grid, `elevations[lat_index * lon_count + lon_index]`.
    elevations: Vec<i16>,
}

impl Tile {
    /// Decode a tile from the raw bytes of a DTED file.
    ///
    /// # Errors
    ///
    /// - [`DtedError::TruncatedInput`] if the buffer is shorter than the
    ///   header and the data records declared by it require
    /// - [`DtedError::MalformedHeader`] if a sentinel, origin, interval or
    ///   count field cannot be parsed
    /// - [`DtedError::ChecksumMismatch`] if any data record fails its
    ///   integrity check
    pub fn decode(bytes: &[u8]) -> Result<Tile> {
        if bytes.len() < HEADER_SIZE {
            return Err(DtedError::TruncatedInput {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        // UHL: recognition sentinel "UHL" plus fixed standard "1"
        if &bytes[0..4] != b"UHL1" {
            return Err(malformed("missing UHL recognition sentinel"));
        }

        let lon_of_origin = parse_angle(&bytes[4..12])?;
        let lat_of_origin = parse_angle(&bytes[12..20])?;
        let lon_interval = parse_interval(&bytes[20..24])?;
        let lat_interval = parse_interval(&bytes[24..28])?;
        // bytes 28..47: vertical accuracy, security code, unique reference
        let lon_count = parse_count(&bytes[47..51])?;
        let lat_count = parse_count(&bytes[51..55])?;

        if lat_count < 2 || lon_count < 2 {
            return Err(malformed(format!(
                "post counts must be at least 2, got {} x {}",
                lat_count, lon_count
            )));
        }

        if &bytes[UHL_SIZE..UHL_SIZE + 3] != b"DSI" {
            return Err(malformed("missing DSI recognition sentinel"));
        }
        if &bytes[UHL_SIZE + DSI_SIZE..UHL_SIZE + DSI_SIZE + 3] != b"ACC" {
            return Err(malformed("missing ACC recognition sentinel"));
        }

        let record_len = RECORD_OVERHEAD + 2 * lat_count;
        let expected = HEADER_SIZE + lon_count * record_len;
        if bytes.len() < expected {
            return Err(DtedError::TruncatedInput {
                expected,
                actual: bytes.len(),
            });
        }

        let mut elevations = vec![0i16; lat_count * lon_count];

        for column in 0..lon_count {
            let start = HEADER_SIZE + column * record_len;
            let record = &bytes[start..start + record_len];

            if record[0] != RECORD_SENTINEL {
                return Err(malformed(format!(
                    "bad sentinel {:#04x} in longitude record {}",
                    record[0], column
                )));
            }

            let body_len = record_len - 4;
            let stored = u32::from_be_bytes([
                record[body_len],
                record[body_len + 1],
                record[body_len + 2],
                record[body_len + 3],
            ]);
            let computed: u32 = record[..body_len].iter().map(|&b| u32::from(b)).sum();
            if stored != computed {
                return Err(DtedError::ChecksumMismatch {
                    column,
                    stored,
                    computed,
                });
            }

            let column_number = u16::from_be_bytes([record[4], record[5]]) as usize;
            if column_number != column {
                return Err(malformed(format!(
                    "longitude record {} labels itself column {}",
                    column, column_number
                )));
            }

            for row in 0..lat_count {
                let offset = 8 + 2 * row;
                let raw = u16::from_be_bytes([record[offset], record[offset + 1]]);
                elevations[row * lon_count + column] = decode_post(raw);
            }
        }

        Ok(Tile {
            lat_of_origin,
            lon_of_origin,
            lat_interval,
            lon_interval,
            lat_count,
            lon_count,
            elevations,
        })
    }

    /// Latitude of the south-west corner in decimal degrees.
    pub fn lat_of_origin(&self) -> f64 {
        self.lat_of_origin
    }

    /// Longitude of the south-west corner in decimal degrees.
    pub fn lon_of_origin(&self) -> f64 {
        self.lon_of_origin
    }

    /// Degrees between adjacent posts along the latitude axis.
    pub fn lat_interval(&self) -> f64 {
        self.lat_interval
    }

    /// Degrees between adjacent posts along the longitude axis.
    pub fn lon_interval(&self) -> f64 {
        self.lon_interval
    }

    /// Number of posts along the latitude axis.
    pub fn lat_count(&self) -> usize {
        self.lat_count
    }

    /// Number of posts along the longitude axis.
    pub fn lon_count(&self) -> usize {
        self.lon_count
    }

    /// Whether an elevation value is the void (no data) marker.
    pub fn is_void(elevation: i16) -> bool {
        elevation == VOID_VALUE
    }

    /// Index of the post nearest to the given latitude.
    ///
    /// May fall outside the grid for coordinates beyond the tile's footprint;
    /// [`Self::altitude_at_index`] bounds-checks on access.
    pub fn lat_index_of(&self, lat: f64) -> isize {
        ((lat - self.lat_of_origin) / self.lat_interval).round() as isize
    }

    /// Index of the post nearest to the given longitude.
    pub fn lon_index_of(&self, lon: f64) -> isize {
        ((lon - self.lon_of_origin) / self.lon_interval).round() as isize
    }

    /// Elevation at a grid index, or `None` outside the grid.
    pub fn altitude_at_index(&self, lat_index: isize, lon_index: isize) -> Option<i16> {
        if lat_index < 0
            || lon_index < 0
            || lat_index as usize >= self.lat_count
            || lon_index as usize >= self.lon_count
        {
            return None;
        }
        Some(self.elevations[lat_index as usize * self.lon_count + lon_index as usize])
    }

    /// Elevation of the post nearest to the given coordinates.
    ///
    /// Returns the literal stored value, which may be [`VOID_VALUE`].
    ///
    /// # Errors
    ///
    /// [`DtedError::OutOfBounds`] if the nearest index falls outside the
    /// grid; querying beyond the tile's footprint is a caller error, not a
    /// silent clamp.
    pub fn altitude_at(&self, lat: f64, lon: f64) -> Result<i16> {
        self.altitude_at_index(self.lat_index_of(lat), self.lon_index_of(lon))
            .ok_or(DtedError::OutOfBounds { lat, lon })
    }

    /// Bilinearly interpolated elevation at the given coordinates.
    ///
    /// Blends the four posts surrounding the point: first along longitude at
    /// the southern and northern rows, then along latitude. At an exact post
    /// the interpolation is an identity. Returns `None` if any of the four
    /// posts falls outside the grid; within the tile's footprint the
    /// inclusive far row/column always satisfies the lookup.
    pub fn interpolated_altitude_at(&self, lat: f64, lon: f64) -> Option<f64> {
        let lat_rel = (lat - self.lat_of_origin) / self.lat_interval;
        let lon_rel = (lon - self.lon_of_origin) / self.lon_interval;
        let lat_index = lat_rel.floor();
        let lon_index = lon_rel.floor();
        let lat_frac = lat_rel - lat_index;
        let lon_frac = lon_rel - lon_index;
        let (i, j) = (lat_index as isize, lon_index as isize);

        let a00 = f64::from(self.altitude_at_index(i, j)?);
        let a01 = f64::from(self.altitude_at_index(i, j + 1)?);
        let a10 = f64::from(self.altitude_at_index(i + 1, j)?);
        let a11 = f64::from(self.altitude_at_index(i + 1, j + 1)?);

        let south = lerp(a00, a01, lon_frac);
        let north = lerp(a10, a11, lon_frac);
        Some(lerp(south, north, lat_frac))
    }

    /// Geographic footprint of this tile.
    pub fn cell_data(&self) -> CellData {
        CellData {
            lat_of_origin: self.lat_of_origin,
            lon_of_origin: self.lon_of_origin,
            lat_of_corner: (self.lat_of_origin + self.lat_count as f64 * self.lat_interval)
                .round(),
            lon_of_corner: (self.lon_of_origin + self.lon_count as f64 * self.lon_interval)
                .round(),
            lat_interval: self.lat_interval,
            lon_interval: self.lon_interval,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Decode one sign-and-magnitude elevation post.
fn decode_post(raw: u16) -> i16 {
    if raw & 0x8000 != 0 {
        -((raw & 0x7FFF) as i16)
    } else {
        raw as i16
    }
}

fn malformed(reason: impl Into<String>) -> DtedError {
    DtedError::MalformedHeader {
        reason: reason.into(),
    }
}

/// Parse a DDDMMSSH sexagesimal angle field to decimal degrees.
fn parse_angle(field: &[u8]) -> Result<f64> {
    let text = std::str::from_utf8(field)
        .map_err(|_| malformed("non-ASCII angle field"))?;
    if !text.is_ascii() {
        return Err(malformed("non-ASCII angle field"));
    }

    let degrees: f64 = parse_digits(&text[0..3])?;
    let minutes: f64 = parse_digits(&text[3..5])?;
    let seconds: f64 = parse_digits(&text[5..7])?;
    let sign = match &text[7..8] {
        "N" | "n" | "E" | "e" => 1.0,
        "S" | "s" | "W" | "w" => -1.0,
        other => {
            return Err(malformed(format!("bad hemisphere '{}'", other)));
        }
    };

    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

/// Parse a 4-digit post spacing field (tenths of arc-seconds) to degrees.
fn parse_interval(field: &[u8]) -> Result<f64> {
    let text = std::str::from_utf8(field)
        .map_err(|_| malformed("non-ASCII interval field"))?;
    let tenths: f64 = parse_digits(text)?;
    if tenths <= 0.0 {
        return Err(malformed("zero post spacing"));
    }
    Ok(tenths / 36000.0)
}

/// Parse a 4-digit post count field.
fn parse_count(field: &[u8]) -> Result<usize> {
    let text = std::str::from_utf8(field)
        .map_err(|_| malformed("non-ASCII count field"))?;
    text.trim_start_matches(' ')
        .parse()
        .map_err(|_| malformed(format!("bad post count '{}'", text)))
}

fn parse_digits(text: &str) -> Result<f64> {
    text.parse()
        .map_err(|_| malformed(format!("bad numeric field '{}'", text)))
}

/// Synthetic tile encoding for tests across the crate.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::{RECORD_SENTINEL, VOID_VALUE};

    /// Post counts of the reference DTED level 0 fixture for cell e008/n53:
    /// 30 arc-second latitude spacing, 60 arc-second longitude spacing.
    pub(crate) const REF_LAT_COUNT: usize = 121;
    pub(crate) const REF_LON_COUNT: usize = 61;

    /// Encode a complete DTED byte buffer with the given geometry and a
    /// closure supplying the elevation for each `(lat_index, lon_index)`.
    pub(crate) fn encode_tile(
        lat_origin: i32,
        lon_origin: i32,
        lat_interval_tenths: u32,
        lon_interval_tenths: u32,
        lat_count: usize,
        lon_count: usize,
        post: impl Fn(usize, usize) -> i16,
    ) -> Vec<u8> {
        let mut bytes = Vec::new();

        // UHL
        bytes.extend_from_slice(b"UHL1");
        push_angle(&mut bytes, lon_origin, 'E', 'W');
        push_angle(&mut bytes, lat_origin, 'N', 'S');
        bytes.extend_from_slice(format!("{:04}", lon_interval_tenths).as_bytes());
        bytes.extend_from_slice(format!("{:04}", lat_interval_tenths).as_bytes());
        bytes.extend_from_slice(b"0005"); // absolute vertical accuracy
        bytes.extend_from_slice(b"U  "); // security code
        bytes.extend_from_slice(b"            "); // unique reference
        bytes.extend_from_slice(format!("{:04}", lon_count).as_bytes());
        bytes.extend_from_slice(format!("{:04}", lat_count).as_bytes());
        bytes.push(b'0'); // multiple accuracy
        bytes.extend_from_slice(&[b' '; 24]);
        assert_eq!(bytes.len(), 80);

        // DSI and ACC, sentinel plus filler
        bytes.extend_from_slice(b"DSI");
        bytes.extend_from_slice(&vec![b' '; 648 - 3]);
        bytes.extend_from_slice(b"ACC");
        bytes.extend_from_slice(&vec![b' '; 2700 - 3]);

        // One data record per longitude line
        for column in 0..lon_count {
            let start = bytes.len();
            bytes.push(RECORD_SENTINEL);
            let block = column as u32;
            bytes.extend_from_slice(&block.to_be_bytes()[1..]); // 3-byte block count
            bytes.extend_from_slice(&(column as u16).to_be_bytes());
            bytes.extend_from_slice(&0u16.to_be_bytes());
            for row in 0..lat_count {
                bytes.extend_from_slice(&encode_post(post(row, column)).to_be_bytes());
            }
            let checksum: u32 = bytes[start..].iter().map(|&b| u32::from(b)).sum();
            bytes.extend_from_slice(&checksum.to_be_bytes());
        }

        bytes
    }

    /// Sign-and-magnitude encoding of an elevation post.
    pub(crate) fn encode_post(elevation: i16) -> u16 {
        if elevation < 0 {
            0x8000 | (-elevation) as u16
        } else {
            elevation as u16
        }
    }

    fn push_angle(bytes: &mut Vec<u8>, degrees: i32, positive: char, negative: char) {
        let hemisphere = if degrees >= 0 { positive } else { negative };
        bytes.extend_from_slice(format!("{:03}0000{}", degrees.abs(), hemisphere).as_bytes());
    }

    /// Elevation pattern of the reference e008/n53 fixture.
    pub(crate) fn reference_post(lat_index: usize, lon_index: usize) -> i16 {
        match (lat_index, lon_index) {
            (0, 0) => 7,
            (5, 5) => -42,
            (10, 10) => VOID_VALUE,
            (60, 30) => 1,
            (60, 33) => 1,
            (60, 34) => 2,
            (61, 33) => 1,
            (61, 34) => 2,
            _ => 0,
        }
    }

    /// Complete reference tile for cell e008/n53 at DTED level 0 geometry.
    pub(crate) fn reference_tile_bytes() -> Vec<u8> {
        encode_tile(53, 8, 300, 600, REF_LAT_COUNT, REF_LON_COUNT, reference_post)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{reference_tile_bytes, REF_LAT_COUNT, REF_LON_COUNT};
    use super::*;

    #[test]
    fn test_decode_header_fields() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();

        assert_eq!(tile.lat_of_origin(), 53.0);
        assert_eq!(tile.lon_of_origin(), 8.0);
        assert_eq!(tile.lat_count(), REF_LAT_COUNT);
        assert_eq!(tile.lon_count(), REF_LON_COUNT);
        // 30 and 60 arc-seconds in decimal degrees
        assert!((tile.lat_interval() - 30.0 / 3600.0).abs() < 1e-12);
        assert!((tile.lon_interval() - 60.0 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn test_decode_grid_matches_pattern() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();

        assert_eq!(tile.altitude_at_index(0, 0), Some(7));
        assert_eq!(tile.altitude_at_index(60, 30), Some(1));
        assert_eq!(tile.altitude_at_index(60, 34), Some(2));
        assert_eq!(tile.altitude_at_index(1, 1), Some(0));
        assert_eq!(
            tile.altitude_at_index(REF_LAT_COUNT as isize - 1, REF_LON_COUNT as isize - 1),
            Some(0)
        );
    }

    #[test]
    fn test_sign_and_magnitude() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();
        assert_eq!(tile.altitude_at_index(5, 5), Some(-42));
    }

    #[test]
    fn test_void_preserved() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();
        assert_eq!(tile.altitude_at_index(10, 10), Some(VOID_VALUE));
        assert!(Tile::is_void(VOID_VALUE));
        assert!(!Tile::is_void(0));
    }

    #[test]
    fn test_corrupted_payload_byte_fails_checksum() {
        let mut bytes = reference_tile_bytes();

        // Flip a byte inside the 17th data record's elevation payload
        let record_len = RECORD_OVERHEAD + 2 * REF_LAT_COUNT;
        let offset = HEADER_SIZE + 17 * record_len + 20;
        bytes[offset] ^= 0x01;

        match Tile::decode(&bytes) {
            Err(DtedError::ChecksumMismatch { column, .. }) => assert_eq!(column, 17),
            other => panic!("expected ChecksumMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupted_checksum_field_fails() {
        let mut bytes = reference_tile_bytes();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        assert!(matches!(
            Tile::decode(&bytes),
            Err(DtedError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_truncated_input() {
        let bytes = reference_tile_bytes();

        match Tile::decode(&bytes[..100]) {
            Err(DtedError::TruncatedInput { actual, .. }) => assert_eq!(actual, 100),
            other => panic!("expected TruncatedInput, got {:?}", other),
        }

        // Header intact but data records cut short
        assert!(matches!(
            Tile::decode(&bytes[..HEADER_SIZE + 50]),
            Err(DtedError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_malformed_sentinels() {
        let mut bytes = reference_tile_bytes();
        bytes[0] = b'X';
        assert!(matches!(
            Tile::decode(&bytes),
            Err(DtedError::MalformedHeader { .. })
        ));

        let mut bytes = reference_tile_bytes();
        bytes[UHL_SIZE] = b'X';
        assert!(matches!(
            Tile::decode(&bytes),
            Err(DtedError::MalformedHeader { .. })
        ));

        let mut bytes = reference_tile_bytes();
        bytes[HEADER_SIZE] = 0x00; // first data record sentinel
        assert!(matches!(
            Tile::decode(&bytes),
            Err(DtedError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_malformed_origin() {
        let mut bytes = reference_tile_bytes();
        bytes[11] = b'X'; // longitude hemisphere
        assert!(matches!(
            Tile::decode(&bytes),
            Err(DtedError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_nearest_post_indexing() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();

        assert_eq!(tile.lat_index_of(53.5), 60);
        assert_eq!(tile.lon_index_of(8.5), 30);
        assert_eq!(tile.altitude_at(53.5, 8.5).unwrap(), 1);
        assert_eq!(tile.altitude_at(53.0, 8.0).unwrap(), 7);
    }

    #[test]
    fn test_nearest_post_out_of_range() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();
        assert!(matches!(
            tile.altitude_at(55.0, 8.5),
            Err(DtedError::OutOfBounds { .. })
        ));
        assert_eq!(tile.altitude_at_index(-1, 0), None);
        assert_eq!(tile.altitude_at_index(0, REF_LON_COUNT as isize), None);
    }

    #[test]
    fn test_interpolation_identity_at_posts() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();
        let interpolated = tile.interpolated_altitude_at(53.5, 8.5).unwrap();
        assert_eq!(interpolated, f64::from(tile.altitude_at(53.5, 8.5).unwrap()));
    }

    #[test]
    fn test_interpolation_off_grid() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();
        // Halfway between posts (60,33)=1, (60,34)=2, (61,33)=1, (61,34)=2
        let altitude = tile.interpolated_altitude_at(53.50415, 8.55833).unwrap();
        assert!((altitude - 1.5).abs() < 0.005, "got {}", altitude);
    }

    #[test]
    fn test_interpolation_at_tile_edge() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();
        // Origin corner uses posts (0,0)..(1,1) with zero fractions
        assert_eq!(tile.interpolated_altitude_at(53.0, 8.0), Some(7.0));
        // The inclusive far row/column satisfies near-edge lookups
        assert!(tile.interpolated_altitude_at(53.9999, 8.9999).is_some());
        // Beyond the footprint the lookup fails instead of clamping
        assert_eq!(tile.interpolated_altitude_at(54.5, 8.5), None);
    }

    #[test]
    fn test_cell_data() {
        let tile = Tile::decode(&reference_tile_bytes()).unwrap();
        let cell = tile.cell_data();

        assert_eq!(cell.lat_of_origin, 53.0);
        assert_eq!(cell.lon_of_origin, 8.0);
        assert_eq!(cell.lat_of_corner, 54.0);
        assert_eq!(cell.lon_of_corner, 9.0);
        assert_eq!(cell.lat_interval, tile.lat_interval());
        assert_eq!(cell.lon_interval, tile.lon_interval());
    }

    #[test]
    fn test_southern_western_origin() {
        let bytes =
            fixtures::encode_tile(-54, -9, 300, 600, REF_LAT_COUNT, REF_LON_COUNT, |_, _| 12);
        let tile = Tile::decode(&bytes).unwrap();

        assert_eq!(tile.lat_of_origin(), -54.0);
        assert_eq!(tile.lon_of_origin(), -9.0);
        assert_eq!(tile.cell_data().lat_of_corner, -53.0);
        assert_eq!(tile.cell_data().lon_of_corner, -8.0);
        assert_eq!(tile.altitude_at(-53.5, -8.5).unwrap(), 12);
    }
}
