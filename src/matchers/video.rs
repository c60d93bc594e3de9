//! Video containers outside the ISO base media family.

use crate::common::binary::{find, slice_at};

use super::audio::riff;

/// MPEG-1/2 program or video stream.
pub fn mpeg(buf: &[u8]) -> bool {
    buf.starts_with(&[0x00, 0x00, 0x01]) && buf.get(3).is_some_and(|b| (0xB0..=0xBF).contains(b))
}

/// Audio Video Interleave.
pub fn avi(buf: &[u8]) -> bool {
    riff(buf, b"AVI ")
}

/// Flash video.
pub fn flv(buf: &[u8]) -> bool {
    buf.starts_with(b"FLV\x01")
}

/// Advanced Systems Format header object GUID.
const ASF_HEADER_GUID: [u8; 16] = [
    0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];

/// Advanced Systems Format (WMV, WMA).
pub fn asf(buf: &[u8]) -> bool {
    buf.starts_with(&ASF_HEADER_GUID)
}

const EBML_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];
const EBML_DOCTYPE_ID: [u8; 2] = [0x42, 0x82];

/// Decode an EBML variable-length size. Returns the value and its width.
fn ebml_vint(buf: &[u8]) -> Option<(usize, usize)> {
    let first = *buf.first()?;
    if first == 0 {
        return None;
    }
    let width = first.leading_zeros() as usize + 1;
    let bytes = slice_at(buf, 0, width)?;
    let mask = 0xFFu8.checked_shr(width as u32).unwrap_or(0);
    let value = bytes[1..]
        .iter()
        .fold(u64::from(first & mask), |acc, &b| (acc << 8) | u64::from(b));
    Some((usize::try_from(value).ok()?, width))
}

/// `DocType` string of an EBML header, if it is visible.
fn ebml_doctype(buf: &[u8]) -> Option<&[u8]> {
    if !buf.starts_with(&EBML_MAGIC) {
        return None;
    }
    let rest = &buf[EBML_MAGIC.len()..];
    let at = find(rest, &EBML_DOCTYPE_ID)? + EBML_DOCTYPE_ID.len();
    let (len, width) = ebml_vint(rest.get(at..)?)?;
    slice_at(rest, at + width, len)
}

/// Matroska video.
pub fn mkv(buf: &[u8]) -> bool {
    ebml_doctype(buf) == Some(&b"matroska"[..])
}

/// WebM, the Matroska profile used on the web.
pub fn webm(buf: &[u8]) -> bool {
    ebml_doctype(buf) == Some(&b"webm"[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ebml(doctype: &[u8]) -> Vec<u8> {
        let mut buf = EBML_MAGIC.to_vec();
        buf.extend_from_slice(&[0x9F, 0x42, 0x86, 0x81, 0x01]);
        buf.extend_from_slice(&EBML_DOCTYPE_ID);
        buf.push(0x80 | doctype.len() as u8);
        buf.extend_from_slice(doctype);
        buf
    }

    #[test]
    fn test_ebml_doctype() {
        assert!(mkv(&ebml(b"matroska")));
        assert!(!webm(&ebml(b"matroska")));
        assert!(webm(&ebml(b"webm")));
        // truncated doctype string
        let data = ebml(b"matroska");
        assert!(!mkv(&data[..data.len() - 2]));
    }

    #[test]
    fn test_ebml_vint() {
        assert_eq!(ebml_vint(&[0x84]), Some((4, 1)));
        assert_eq!(ebml_vint(&[0x40, 0x10]), Some((16, 2)));
        assert_eq!(ebml_vint(&[0x40]), None);
        assert_eq!(ebml_vint(&[0x00, 0x01]), None);
    }

    #[test]
    fn test_mpeg_pack_headers() {
        assert!(mpeg(&[0x00, 0x00, 0x01, 0xBA, 0x44]));
        assert!(mpeg(&[0x00, 0x00, 0x01, 0xB3]));
        assert!(!mpeg(&[0x00, 0x00, 0x01, 0xE0]));
        assert!(!mpeg(&[0x00, 0x00, 0x01]));
    }

    #[test]
    fn test_riff_and_magic() {
        assert!(avi(b"RIFF\x00\x00\x00\x00AVI LIST"));
        assert!(flv(b"FLV\x01\x05"));
        assert!(asf(&ASF_HEADER_GUID));
        assert!(!asf(&ASF_HEADER_GUID[..8]));
    }
}
