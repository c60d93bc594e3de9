//! Raster, vector-adjacent and scientific image signatures.

use crate::common::binary::{has_at, slice_at};

/// PNG image.
pub fn png(buf: &[u8]) -> bool {
    buf.starts_with(b"\x89PNG\r\n\x1A\n")
}

/// JPEG image.
pub fn jpg(buf: &[u8]) -> bool {
    buf.starts_with(&[0xFF, 0xD8, 0xFF])
}

/// JPEG 2000 signature box.
const JP2_SIGNATURE_BOX: &[u8] = &[
    0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
];

/// JPEG 2000 family member identified by the brand of its `ftyp` box.
fn jpeg2000(buf: &[u8], brand: &[u8; 4]) -> bool {
    buf.starts_with(JP2_SIGNATURE_BOX) && has_at(buf, 16, b"ftyp") && has_at(buf, 20, brand)
}

/// JPEG 2000 part 1.
pub fn jp2(buf: &[u8]) -> bool {
    jpeg2000(buf, b"jp2 ")
}

/// JPEG 2000 part 2 (extended).
pub fn jpx(buf: &[u8]) -> bool {
    jpeg2000(buf, b"jpx ")
}

/// JPEG 2000 part 6 (compound).
pub fn jpm(buf: &[u8]) -> bool {
    jpeg2000(buf, b"jpm ")
}

/// GIF image.
pub fn gif(buf: &[u8]) -> bool {
    buf.starts_with(b"GIF87a") || buf.starts_with(b"GIF89a")
}

/// WebP image.
pub fn webp(buf: &[u8]) -> bool {
    buf.starts_with(b"RIFF") && has_at(buf, 8, b"WEBP")
}

/// TIFF image, either byte order.
pub fn tiff(buf: &[u8]) -> bool {
    buf.starts_with(b"II*\x00") || buf.starts_with(b"MM\x00*")
}

/// Windows bitmap.
///
/// `BM` alone is too common in text, so the reserved header words must be zero.
pub fn bmp(buf: &[u8]) -> bool {
    buf.starts_with(b"BM") && slice_at(buf, 6, 4).is_some_and(|reserved| reserved == [0, 0, 0, 0])
}

/// Windows icon or cursor.
pub fn ico(buf: &[u8]) -> bool {
    buf.starts_with(&[0x00, 0x00, 0x01, 0x00]) || buf.starts_with(&[0x00, 0x00, 0x02, 0x00])
}

/// Apple icon image.
pub fn icns(buf: &[u8]) -> bool {
    buf.starts_with(b"icns")
}

/// Photoshop document.
pub fn psd(buf: &[u8]) -> bool {
    buf.starts_with(b"8BPS")
}

/// Better Portable Graphics.
pub fn bpg(buf: &[u8]) -> bool {
    buf.starts_with(&[0x42, 0x50, 0x47, 0xFB])
}

/// AutoCAD release codes that follow the `AC10` prefix.
const DWG_VERSIONS: [&[u8; 2]; 13] = [
    b"02", b"03", b"04", b"06", b"09", b"12", b"14", b"15", b"18", b"21", b"24", b"27", b"32",
];

/// AutoCAD drawing.
pub fn dwg(buf: &[u8]) -> bool {
    buf.starts_with(b"AC10")
        && slice_at(buf, 4, 2).is_some_and(|v| DWG_VERSIONS.iter().any(|known| known[..] == *v))
}

/// DjVu document, single or multi page.
pub fn djvu(buf: &[u8]) -> bool {
    buf.starts_with(b"AT&TFORM")
        && [b"DJVU", b"DJVM", b"DJVI", b"THUM"]
            .iter()
            .any(|kind| has_at(buf, 12, *kind))
}

/// DICOM medical image (`DICM` after the 128-byte preamble).
pub fn dcm(buf: &[u8]) -> bool {
    has_at(buf, 128, b"DICM")
}

/// Flexible Image Transport System.
pub fn fits(buf: &[u8]) -> bool {
    buf.starts_with(b"SIMPLE  =                    T")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jp2_header(brand: &[u8; 4]) -> Vec<u8> {
        let mut buf = JP2_SIGNATURE_BOX.to_vec();
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x14]);
        buf.extend_from_slice(b"ftyp");
        buf.extend_from_slice(brand);
        buf.extend_from_slice(&[0, 0, 0, 0]);
        buf
    }

    #[test]
    fn test_common_rasters() {
        assert!(png(b"\x89PNG\r\n\x1A\n\x00\x00\x00\x0DIHDR"));
        assert!(jpg(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(gif(b"GIF89a\x01\x00"));
        assert!(!gif(b"GIF88a"));
        assert!(webp(b"RIFF\x24\x00\x00\x00WEBPVP8 "));
        assert!(!webp(b"RIFF\x24\x00\x00\x00WAVEfmt "));
    }

    #[test]
    fn test_jpeg2000_brands() {
        assert!(jp2(&jp2_header(b"jp2 ")));
        assert!(!jp2(&jp2_header(b"jpx ")));
        assert!(jpx(&jp2_header(b"jpx ")));
        assert!(jpm(&jp2_header(b"jpm ")));
        assert!(!jpm(JP2_SIGNATURE_BOX));
    }

    #[test]
    fn test_bmp_requires_reserved_zero() {
        assert!(bmp(b"BM\x36\x00\x0C\x00\x00\x00\x00\x00\x36\x00"));
        assert!(!bmp(b"BMW is a car brand"));
        assert!(!bmp(b"BM"));
    }

    #[test]
    fn test_ico_and_cursor() {
        let ico_data = [0x00, 0x00, 0x01, 0x00, 0x02, 0x00];
        assert!(ico(&ico_data));
        assert!(ico(&[0x00, 0x00, 0x02, 0x00]));
        assert!(!ico(&[0x00, 0x00, 0x03, 0x00]));
    }

    #[test]
    fn test_dwg_versions() {
        assert!(dwg(b"AC1032\x00\x00"));
        assert!(dwg(b"AC1015"));
        assert!(!dwg(b"AC1099"));
        assert!(!dwg(b"AC10"));
    }

    #[test]
    fn test_dcm_preamble() {
        let mut data = vec![0u8; 128];
        data.extend_from_slice(b"DICM");
        assert!(dcm(&data));
        assert!(!dcm(&data[..130]));
    }

    #[test]
    fn test_misc() {
        assert!(djvu(b"AT&TFORM\x00\x00\x00\x10DJVM"));
        assert!(!djvu(b"AT&TFORM\x00\x00\x00\x10AIFF"));
        assert!(fits(b"SIMPLE  =                    T / conforms"));
        assert!(tiff(b"MM\x00*\x00\x00\x00\x08"));
        assert!(psd(b"8BPS\x00\x01"));
        assert!(bpg(&[0x42, 0x50, 0x47, 0xFB, 0x00]));
    }
}
