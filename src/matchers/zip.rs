//! Probes for formats that share the ZIP envelope.
//!
//! Only the local file headers present in the bounded prefix are visible,
//! so these probes walk the entries from the start of the buffer and decide
//! from the first few names. The central directory at the end of the archive
//! is never consulted.

use zerocopy::{FromBytes, LE, U16, U32};
use zerocopy_derive::{FromBytes as DeriveFromBytes, Immutable, KnownLayout, Unaligned};

use crate::common::binary::{find, has_at};

const LOCAL_HEADER_SIGNATURE: &[u8; 4] = b"PK\x03\x04";
/// General purpose flag: sizes are stored in a trailing data descriptor.
const FLAG_DATA_DESCRIPTOR: u16 = 1 << 3;
/// Number of leading entries inspected before giving up.
const MAX_ENTRIES: usize = 8;

/// ZIP local file header (30 bytes, little-endian).
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, DeriveFromBytes, Immutable, KnownLayout, Unaligned)]
struct LocalFileHeader {
    signature: [u8; 4],
    version_needed: U16<LE>,
    flags: U16<LE>,
    compression: U16<LE>,
    mod_time: U16<LE>,
    mod_date: U16<LE>,
    crc32: U32<LE>,
    compressed_size: U32<LE>,
    uncompressed_size: U32<LE>,
    name_len: U16<LE>,
    extra_len: U16<LE>,
}

/// One local entry visible in the prefix.
#[derive(Debug, Clone, Copy)]
pub struct LocalEntry<'a> {
    /// Raw entry name.
    pub name: &'a [u8],
    /// Stored (possibly truncated) payload that follows the header.
    pub data: &'a [u8],
}

/// Iterator over the local file headers found at the start of a ZIP buffer.
#[derive(Debug, Clone)]
pub struct LocalEntries<'a> {
    buf: &'a [u8],
    pos: Option<usize>,
}

/// Walk the local entries of `buf`, starting at offset 0.
pub fn local_entries(buf: &[u8]) -> LocalEntries<'_> {
    LocalEntries { buf, pos: Some(0) }
}

impl<'a> Iterator for LocalEntries<'a> {
    type Item = LocalEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos.take()?;
        let rest = self.buf.get(pos..)?;
        let (header, tail) = LocalFileHeader::ref_from_prefix(rest).ok()?;
        if &header.signature != LOCAL_HEADER_SIGNATURE {
            return None;
        }

        let name_len = usize::from(header.name_len.get());
        let extra_len = usize::from(header.extra_len.get());
        let name = tail.get(..name_len)?;
        let data_start = pos + 30 + name_len + extra_len;
        let data = self.buf.get(data_start..).unwrap_or(&[]);

        let compressed = header.compressed_size.get();
        let sized = header.flags.get() & FLAG_DATA_DESCRIPTOR == 0 && compressed != u32::MAX;
        self.pos = if sized {
            data_start.checked_add(compressed as usize)
        } else {
            // Size unknown up front: resume at the next local header signature.
            find(data, LOCAL_HEADER_SIGNATURE).map(|offset| data_start + offset)
        };

        Some(LocalEntry { name, data })
    }
}

/// Whether one of the first entries has a name starting with `prefix`.
fn has_entry_with_prefix(buf: &[u8], prefix: &[u8]) -> bool {
    local_entries(buf)
        .take(MAX_ENTRIES)
        .any(|entry| entry.name.starts_with(prefix))
}

/// OOXML package whose parts live under `dir`.
///
/// Package-level parts (`[Content_Types].xml`, `_rels/`, `docProps/`) come
/// first in most producers, so the first handful of entries is scanned.
fn ooxml(buf: &[u8], dir: &[u8]) -> bool {
    has_entry_with_prefix(buf, dir)
}

/// OOXML spreadsheet.
pub fn xlsx(buf: &[u8]) -> bool {
    ooxml(buf, b"xl/")
}

/// OOXML word-processing document.
pub fn docx(buf: &[u8]) -> bool {
    ooxml(buf, b"word/")
}

/// OOXML presentation.
pub fn pptx(buf: &[u8]) -> bool {
    ooxml(buf, b"ppt/")
}

/// Java archive.
pub fn jar(buf: &[u8]) -> bool {
    local_entries(buf)
        .take(MAX_ENTRIES)
        .any(|entry| entry.name == b"META-INF/MANIFEST.MF" || entry.name == b"META-INF/")
}

/// Offset of the stored `mimetype` entry name in an OCF / ODF package.
const MIMETYPE_ENTRY_OFFSET: usize = 30;

/// Package whose first, uncompressed `mimetype` entry starts with `mime`.
fn mimetype_entry(buf: &[u8], mime: &[u8]) -> bool {
    has_at(buf, MIMETYPE_ENTRY_OFFSET, b"mimetype")
        && has_at(buf, MIMETYPE_ENTRY_OFFSET + b"mimetype".len(), mime)
}

/// EPUB publication.
pub fn epub(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/epub+zip")
}

/// OpenDocument text (templates included).
pub fn odt(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.text")
}

/// OpenDocument text template.
pub fn ott(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.text-template")
}

/// OpenDocument spreadsheet (templates included).
pub fn ods(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.spreadsheet")
}

/// OpenDocument spreadsheet template.
pub fn ots(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.spreadsheet-template")
}

/// OpenDocument presentation (templates included).
pub fn odp(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.presentation")
}

/// OpenDocument presentation template.
pub fn otp(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.presentation-template")
}

/// OpenDocument graphics (templates included).
pub fn odg(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.graphics")
}

/// OpenDocument graphics template.
pub fn otg(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.graphics-template")
}

/// OpenDocument formula.
pub fn odf(buf: &[u8]) -> bool {
    mimetype_entry(buf, b"application/vnd.oasis.opendocument.formula")
}

/// Test helper: build a ZIP prefix of stored entries.
#[cfg(test)]
pub(crate) fn stored_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (name, data) in entries {
        out.extend_from_slice(LOCAL_HEADER_SIGNATURE);
        out.extend_from_slice(&20u16.to_le_bytes()); // version
        out.extend_from_slice(&0u16.to_le_bytes()); // flags
        out.extend_from_slice(&0u16.to_le_bytes()); // stored
        out.extend_from_slice(&[0u8; 4]); // time, date
        out.extend_from_slice(&[0u8; 4]); // crc32
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // extra
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(data.as_bytes());
    }
    out
}
