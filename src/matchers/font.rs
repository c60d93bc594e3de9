//! Font containers.

use crate::common::binary::{has_at, read_u32_le};

/// Web Open Font Format 1.0.
pub fn woff(buf: &[u8]) -> bool {
    buf.starts_with(b"wOFF")
}

/// Web Open Font Format 2.0.
pub fn woff2(buf: &[u8]) -> bool {
    buf.starts_with(b"wOF2")
}

/// OpenType font with CFF outlines.
pub fn otf(buf: &[u8]) -> bool {
    buf.starts_with(b"OTTO")
}

/// Embedded OpenType.
///
/// The `LP` magic sits at offset 34; the header version must be a known one.
pub fn eot(buf: &[u8]) -> bool {
    has_at(buf, 34, b"LP")
        && matches!(
            read_u32_le(buf, 8),
            Some(0x0001_0000 | 0x0002_0001 | 0x0002_0002)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eot_header() {
        let mut data = vec![0u8; 36];
        data[8..12].copy_from_slice(&0x0002_0001u32.to_le_bytes());
        data[34..36].copy_from_slice(b"LP");
        assert!(eot(&data));

        data[8..12].copy_from_slice(&0x0003_0000u32.to_le_bytes());
        assert!(!eot(&data));
        assert!(!eot(&data[..35]));
    }

    #[test]
    fn test_magics() {
        assert!(woff(b"wOFF\x00\x01\x00\x00"));
        assert!(woff2(b"wOF2\x00\x01\x00\x00"));
        assert!(!woff(b"wOF2"));
        assert!(otf(b"OTTO\x00\x0A"));
    }
}
