//! Archive and compression signatures.

use crate::common::binary::{has_at, slice_at};

/// ZIP local file header, empty archive and spanned archive markers.
pub const ZIP_SIGNATURES: [&[u8]; 3] = [b"PK\x03\x04", b"PK\x05\x06", b"PK\x07\x08"];

/// 7-Zip archive.
pub fn seven_z(buf: &[u8]) -> bool {
    buf.starts_with(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C])
}

/// ZIP container (also the envelope of OOXML, ODF, EPUB and JAR).
pub fn zip(buf: &[u8]) -> bool {
    ZIP_SIGNATURES.iter().any(|sig| buf.starts_with(sig))
}

/// gzip stream.
pub fn gzip(buf: &[u8]) -> bool {
    buf.starts_with(&[0x1F, 0x8B])
}

/// bzip2 stream.
pub fn bz2(buf: &[u8]) -> bool {
    buf.starts_with(b"BZh")
}

/// Zstandard frame, including the pre-1.0 magic numbers.
pub fn zstd(buf: &[u8]) -> bool {
    match buf.first() {
        Some(&b) => {
            ((0x22..=0x28).contains(&b) || b == 0x1E) && has_at(buf, 1, &[0xB5, 0x2F, 0xFD])
        }
        None => false,
    }
}

/// eXtensible ARchive.
pub fn xar(buf: &[u8]) -> bool {
    buf.starts_with(b"xar!")
}

/// RAR 1.5-4.x and 5.0 archives.
pub fn rar(buf: &[u8]) -> bool {
    buf.starts_with(b"Rar!\x1A\x07\x00") || buf.starts_with(b"Rar!\x1A\x07\x01\x00")
}

/// Unix `ar` archive.
pub fn ar(buf: &[u8]) -> bool {
    buf.starts_with(b"!<arch>\n")
}

/// Debian package: an `ar` archive whose first member is `debian-binary`.
pub fn deb(buf: &[u8]) -> bool {
    has_at(buf, 8, b"debian-binary")
}

/// Chrome extension package.
pub fn crx(buf: &[u8]) -> bool {
    buf.starts_with(b"Cr24")
}

/// Size of a tar header block.
const TAR_BLOCK: usize = 512;
/// Offset and width of the header checksum field.
const TAR_CHECKSUM: (usize, usize) = (148, 8);

/// POSIX and GNU tar.
///
/// Accepts the `ustar` magic, or a v7 header whose checksum is consistent.
pub fn tar(buf: &[u8]) -> bool {
    if has_at(buf, 257, b"ustar") {
        return true;
    }

    let Some(header) = slice_at(buf, 0, TAR_BLOCK) else {
        return false;
    };
    if header[0] == 0 {
        return false;
    }

    let (offset, width) = TAR_CHECKSUM;
    let Some(recorded) = parse_octal(&header[offset..offset + width]) else {
        return false;
    };

    // The checksum field itself is summed as if it held spaces.
    let computed: u64 = header
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if (offset..offset + width).contains(&i) {
                u64::from(b' ')
            } else {
                u64::from(b)
            }
        })
        .sum();

    recorded == computed
}

fn parse_octal(field: &[u8]) -> Option<u64> {
    let trimmed: &[u8] = {
        let start = field.iter().position(|&b| b != b' ' && b != 0)?;
        let rest = &field[start..];
        let end = rest
            .iter()
            .position(|&b| b == b' ' || b == 0)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if trimmed.is_empty() {
        return None;
    }
    trimmed.iter().try_fold(0u64, |acc, &b| match b {
        b'0'..=b'7' => Some(acc * 8 + u64::from(b - b'0')),
        _ => None,
    })
}
