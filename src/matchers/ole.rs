//! OLE2 compound document probes (legacy Office formats).
//!
//! The container is identified by its 8-byte magic. Telling a `.doc` from an
//! `.xls` needs the directory, which can sit anywhere in the file, so the
//! application is resolved from whatever the bounded prefix shows, in order:
//!
//! 1. the CLSID of the root directory entry, when the first directory sector
//!    lies inside the buffer;
//! 2. well-known stream names in any directory entry inside the buffer;
//! 3. the record that conventionally starts the first sector after the header.

use crate::common::binary::{has_at, read_u16_le, read_u32_le, slice_at};

/// OLE2 compound file magic.
pub const OLE2_SIGNATURE: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const HEADER_SIZE: usize = 512;
const DIR_ENTRY_SIZE: usize = 128;
const DIR_ENTRY_CLSID: usize = 80;
const SECTOR_SHIFT_OFFSET: usize = 30;
const FIRST_DIR_SECTOR_OFFSET: usize = 48;
/// Sector ids at or above this value are markers (free, end of chain, ...).
const MAX_REGULAR_SECTOR: u32 = 0xFFFF_FFFA;

/// Application that wrote a compound document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OleKind {
    Doc,
    Xls,
    Ppt,
    Pub,
}

/// GUID in on-disk order: the first three fields are little-endian.
const fn clsid(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> [u8; 16] {
    let a = data1.to_le_bytes();
    let b = data2.to_le_bytes();
    let c = data3.to_le_bytes();
    [
        a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], data4[0], data4[1], data4[2], data4[3],
        data4[4], data4[5], data4[6], data4[7],
    ]
}

/// Tail shared by the `{000209xx-0000-0000-C000-000000000046}` family.
const OFFICE_TAIL: [u8; 8] = [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46];

const CLSIDS: &[([u8; 16], OleKind)] = &[
    // Word 97-2003
    (clsid(0x00020906, 0, 0, OFFICE_TAIL), OleKind::Doc),
    // Word 6.0/95
    (clsid(0x00020900, 0, 0, OFFICE_TAIL), OleKind::Doc),
    // Excel 97-2003
    (clsid(0x00020820, 0, 0, OFFICE_TAIL), OleKind::Xls),
    // Excel 5.0/95
    (clsid(0x00020810, 0, 0, OFFICE_TAIL), OleKind::Xls),
    // PowerPoint 97-2003
    (
        clsid(0x64818D10, 0x4F9B, 0x11CF, [0x86, 0xEA, 0x00, 0xAA, 0x00, 0xB9, 0x29, 0xE8]),
        OleKind::Ppt,
    ),
    // PowerPoint 95
    (
        clsid(0xEA7BAE70, 0xFB3B, 0x11CD, [0xA9, 0x03, 0x00, 0xAA, 0x00, 0x51, 0x0E, 0xA3]),
        OleKind::Ppt,
    ),
    // Publisher
    (clsid(0x00021201, 0, 0, OFFICE_TAIL), OleKind::Pub),
];

/// Directory entry names (UTF-16LE, NUL terminated), checked in this order.
const STREAM_NAMES: &[(&[u8], OleKind)] = &[
    (b"W\0o\0r\0d\0D\0o\0c\0u\0m\0e\0n\0t\0\0\0", OleKind::Doc),
    (b"P\0o\0w\0e\0r\0P\0o\0i\0n\0t\0 \0D\0o\0c\0u\0m\0e\0n\0t\0\0\0", OleKind::Ppt),
    (b"W\0o\0r\0k\0b\0o\0o\0k\0\0\0", OleKind::Xls),
    (b"B\0o\0o\0k\0\0\0", OleKind::Xls),
    (b"Q\0u\0i\0l\0l\0\0\0", OleKind::Pub),
];

/// Records found at the start of the first sector after the header.
const FIRST_SECTOR_MARKERS: &[(&[u8], OleKind)] = &[
    // Word FIB magic 0xA5EC
    (&[0xEC, 0xA5, 0xC1, 0x00], OleKind::Doc),
    // BIFF8 BOF record
    (&[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00], OleKind::Xls),
    // PowerPoint record headers
    (&[0xA0, 0x46, 0x1D, 0xF0], OleKind::Ppt),
    (&[0x00, 0x6E, 0x1E, 0xF0], OleKind::Ppt),
    (&[0x0F, 0x00, 0xE8, 0x03], OleKind::Ppt),
];

/// OLE2 compound document container.
pub fn ole(buf: &[u8]) -> bool {
    buf.starts_with(OLE2_SIGNATURE)
}

/// Resolve the writing application of a compound document.
pub fn classify(buf: &[u8]) -> Option<OleKind> {
    if !ole(buf) {
        return None;
    }
    kind_from_root_clsid(buf)
        .or_else(|| kind_from_stream_names(buf))
        .or_else(|| kind_from_first_sector(buf))
}

fn kind_from_root_clsid(buf: &[u8]) -> Option<OleKind> {
    let shift = u32::from(read_u16_le(buf, SECTOR_SHIFT_OFFSET)?);
    if !(7..=16).contains(&shift) {
        return None;
    }
    let first_dir = read_u32_le(buf, FIRST_DIR_SECTOR_OFFSET)?;
    if first_dir >= MAX_REGULAR_SECTOR {
        return None;
    }
    let offset = (u64::from(first_dir) + 1).checked_shl(shift)?;
    let offset = usize::try_from(offset).ok()?;
    let clsid = slice_at(buf, offset.checked_add(DIR_ENTRY_CLSID)?, 16)?;

    CLSIDS
        .iter()
        .find(|(known, _)| known[..] == *clsid)
        .map(|&(_, kind)| kind)
}

fn kind_from_stream_names(buf: &[u8]) -> Option<OleKind> {
    STREAM_NAMES.iter().find_map(|&(name, kind)| {
        (HEADER_SIZE..buf.len())
            .step_by(DIR_ENTRY_SIZE)
            .any(|offset| has_at(buf, offset, name))
            .then_some(kind)
    })
}

fn kind_from_first_sector(buf: &[u8]) -> Option<OleKind> {
    FIRST_SECTOR_MARKERS
        .iter()
        .find(|(marker, _)| has_at(buf, HEADER_SIZE, marker))
        .map(|&(_, kind)| kind)
}

/// Word 97-2003 document.
pub fn doc(buf: &[u8]) -> bool {
    classify(buf) == Some(OleKind::Doc)
}

/// Excel 97-2003 workbook.
pub fn xls(buf: &[u8]) -> bool {
    classify(buf) == Some(OleKind::Xls)
}

/// PowerPoint 97-2003 presentation.
pub fn ppt(buf: &[u8]) -> bool {
    classify(buf) == Some(OleKind::Ppt)
}

/// Publisher document.
pub fn publisher(buf: &[u8]) -> bool {
    classify(buf) == Some(OleKind::Pub)
}

/// Test helper: header with 512-byte sectors and the directory at `first_dir`.
#[cfg(test)]
pub(crate) fn ole_header(first_dir: u32) -> Vec<u8> {
    let mut buf = vec![0u8; HEADER_SIZE];
    buf[..8].copy_from_slice(OLE2_SIGNATURE);
    buf[26..28].copy_from_slice(&3u16.to_le_bytes());
    buf[28..30].copy_from_slice(&[0xFE, 0xFF]);
    buf[SECTOR_SHIFT_OFFSET..SECTOR_SHIFT_OFFSET + 2].copy_from_slice(&9u16.to_le_bytes());
    buf[FIRST_DIR_SECTOR_OFFSET..FIRST_DIR_SECTOR_OFFSET + 4]
        .copy_from_slice(&first_dir.to_le_bytes());
    buf
}
