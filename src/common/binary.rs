//! Bounds-checked binary readers shared by the signature predicates.
//!
//! Every reader returns `None` instead of panicking when the requested range
//! falls outside the buffer, so a predicate can answer `false` on truncated
//! input with a single `?`-style chain.

use zerocopy::{BE, FromBytes, LE, U16, U32};

/// Borrow `len` bytes starting at `offset`, if they are all present.
///
/// # Examples
///
/// ```
/// use longan::common::binary::slice_at;
/// let data = [1u8, 2, 3, 4];
/// assert_eq!(slice_at(&data, 1, 2), Some(&[2u8, 3][..]));
/// assert_eq!(slice_at(&data, 3, 2), None);
/// ```
#[inline]
pub fn slice_at(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    data.get(offset..end)
}

/// Check whether `data` contains `pattern` at exactly `offset`.
#[inline]
pub fn has_at(data: &[u8], offset: usize, pattern: &[u8]) -> bool {
    slice_at(data, offset, pattern.len()) == Some(pattern)
}

/// Read a little-endian u16 at the given offset.
///
/// # Examples
///
/// ```
/// use longan::common::binary::read_u16_le;
/// let data = [0x34, 0x12, 0x78, 0x56];
/// assert_eq!(read_u16_le(&data, 0), Some(0x1234));
/// assert_eq!(read_u16_le(&data, 3), None);
/// ```
#[inline]
pub fn read_u16_le(data: &[u8], offset: usize) -> Option<u16> {
    U16::<LE>::read_from_bytes(slice_at(data, offset, 2)?)
        .ok()
        .map(|v| v.get())
}

/// Read a big-endian u16 at the given offset.
#[inline]
pub fn read_u16_be(data: &[u8], offset: usize) -> Option<u16> {
    U16::<BE>::read_from_bytes(slice_at(data, offset, 2)?)
        .ok()
        .map(|v| v.get())
}

/// Read a little-endian u32 at the given offset.
///
/// # Examples
///
/// ```
/// use longan::common::binary::read_u32_le;
/// let data = [0x78, 0x56, 0x34, 0x12];
/// assert_eq!(read_u32_le(&data, 0), Some(0x12345678));
/// ```
#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    U32::<LE>::read_from_bytes(slice_at(data, offset, 4)?)
        .ok()
        .map(|v| v.get())
}

/// Read a big-endian u32 at the given offset.
#[inline]
pub fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
    U32::<BE>::read_from_bytes(slice_at(data, offset, 4)?)
        .ok()
        .map(|v| v.get())
}

/// Find the first occurrence of `needle` in `haystack`.
#[inline]
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    memchr::memmem::find(haystack, needle)
}

/// Check whether `needle` occurs anywhere in `haystack`.
#[inline]
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}

/// Skip leading ASCII whitespace.
#[inline]
pub fn trim_start_ascii(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    &data[start..]
}

/// Case-insensitive ASCII prefix check.
#[inline]
pub fn starts_with_ignore_case(data: &[u8], prefix: &[u8]) -> bool {
    data.len() >= prefix.len() && data[..prefix.len()].eq_ignore_ascii_case(prefix)
}
