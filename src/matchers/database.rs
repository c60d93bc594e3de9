//! Database and GIS table formats.

use crate::common::binary::{has_at, read_u16_le, read_u32_be, read_u32_le};

/// SQLite 3 database.
pub fn sqlite(buf: &[u8]) -> bool {
    buf.starts_with(b"SQLite format 3\x00")
}

/// Microsoft Access (Jet) database.
pub fn mdb(buf: &[u8]) -> bool {
    has_at(buf, 4, b"Standard Jet DB")
}

/// Microsoft Access 2007+ (ACE) database.
pub fn accdb(buf: &[u8]) -> bool {
    has_at(buf, 4, b"Standard ACE DB")
}

/// dBase/FoxPro version bytes.
const DBF_VERSIONS: [u8; 15] = [
    0x02, 0x03, 0x04, 0x05, 0x30, 0x31, 0x32, 0x43, 0x63, 0x83, 0x8B, 0xCB, 0xE5, 0xF5, 0xFB,
];

/// dBase table.
///
/// There is no magic, so the header is validated field by field: version,
/// last update month and day, header length and record length.
pub fn dbf(buf: &[u8]) -> bool {
    let Some(&[version, _, month, day]) = buf.get(..4) else {
        return false;
    };
    if !DBF_VERSIONS.contains(&version) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return false;
    }
    let header_len = read_u16_le(buf, 8).unwrap_or(0);
    let record_len = read_u16_le(buf, 10).unwrap_or(0);
    // 32-byte file header plus the field descriptor terminator at minimum.
    header_len >= 33 && record_len > 0
}

/// Shapefile main and index files share this file code.
const SHAPEFILE_CODE: u32 = 9994;
const SHAPEFILE_VERSION: u32 = 1000;
const SHAPEFILE_HEADER: usize = 100;

/// ESRI shapefile index (`.shx`), and the header shared with `.shp`.
pub fn shx(buf: &[u8]) -> bool {
    read_u32_be(buf, 0) == Some(SHAPEFILE_CODE) && read_u32_le(buf, 28) == Some(SHAPEFILE_VERSION)
}

/// ESRI shapefile main file.
///
/// The first record follows the header: record number 1, and a shape type
/// equal to the one declared in the header (or null).
pub fn shp(buf: &[u8]) -> bool {
    if !shx(buf) || read_u32_be(buf, SHAPEFILE_HEADER) != Some(1) {
        return false;
    }
    match (read_u32_le(buf, 32), read_u32_le(buf, SHAPEFILE_HEADER + 8)) {
        (Some(declared), Some(first)) => first == declared || first == 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapefile_header(shape_type: u32) -> Vec<u8> {
        let mut buf = vec![0u8; SHAPEFILE_HEADER];
        buf[..4].copy_from_slice(&SHAPEFILE_CODE.to_be_bytes());
        buf[28..32].copy_from_slice(&SHAPEFILE_VERSION.to_le_bytes());
        buf[32..36].copy_from_slice(&shape_type.to_le_bytes());
        buf
    }

    #[test]
    fn test_shx_and_shp() {
        let mut index = shapefile_header(5);
        // first index entry: offset 50 words, length 40 words
        index.extend_from_slice(&50u32.to_be_bytes());
        index.extend_from_slice(&40u32.to_be_bytes());
        assert!(shx(&index));
        assert!(!shp(&index));

        let mut main = shapefile_header(5);
        main.extend_from_slice(&1u32.to_be_bytes());
        main.extend_from_slice(&40u32.to_be_bytes());
        main.extend_from_slice(&5u32.to_le_bytes());
        assert!(shp(&main));
    }

    #[test]
    fn test_dbf_header() {
        let mut header = vec![0u8; 32];
        header[..4].copy_from_slice(&[0x03, 124, 6, 15]);
        header[8..10].copy_from_slice(&97u16.to_le_bytes());
        header[10..12].copy_from_slice(&42u16.to_le_bytes());
        assert!(dbf(&header));

        header[2] = 13;
        assert!(!dbf(&header));
        assert!(!dbf(b"\x03"));
    }

    #[test]
    fn test_access_and_sqlite() {
        assert!(mdb(b"\x00\x01\x00\x00Standard Jet DB\x00"));
        assert!(accdb(b"\x00\x01\x00\x00Standard ACE DB\x00"));
        assert!(!mdb(b"\x00\x01\x00\x00Standard ACE DB\x00"));
        assert!(sqlite(b"SQLite format 3\x00\x10\x00"));
    }
}
