//! Page description, e-book and bibliographic formats.

use crate::common::binary::{has_at, slice_at};

/// Portable Document Format.
pub fn pdf(buf: &[u8]) -> bool {
    buf.starts_with(b"%PDF-")
}

/// PostScript.
pub fn ps(buf: &[u8]) -> bool {
    buf.starts_with(b"%!PS-Adobe-")
}

/// Mobipocket e-book (PalmDOC database type and creator at offset 60).
pub fn mobi(buf: &[u8]) -> bool {
    has_at(buf, 60, b"BOOKMOBI")
}

/// Microsoft Reader e-book.
pub fn lit(buf: &[u8]) -> bool {
    buf.starts_with(b"ITOLITLS")
}

/// MARC 21 bibliographic record.
///
/// Recognised by its 24-byte leader: a numeric record length, indicator and
/// subfield code counts of 2, a numeric base address and the `4500` entry map.
pub fn marc(buf: &[u8]) -> bool {
    let Some(leader) = slice_at(buf, 0, 24) else {
        return false;
    };
    leader[..5].iter().all(u8::is_ascii_digit)
        && leader[10] == b'2'
        && leader[11] == b'2'
        && leader[12..17].iter().all(u8::is_ascii_digit)
        && &leader[20..24] == b"4500"
}
