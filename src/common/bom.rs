//! Byte order marks and the encoding they announce.

/// Encoding announced by a leading byte order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl BomKind {
    /// Whether the marked text can be scanned byte by byte as ASCII-compatible data.
    #[inline]
    pub const fn is_utf8(self) -> bool {
        matches!(self, BomKind::Utf8)
    }
}

/// Detect a BOM at the start of `data`.
///
/// The UTF-32 LE mark begins with the UTF-16 LE mark, so it is tried first.
pub fn detect_bom(data: &[u8]) -> Option<BomKind> {
    match data {
        [0x00, 0x00, 0xFE, 0xFF, ..] => Some(BomKind::Utf32Be),
        [0xFF, 0xFE, 0x00, 0x00, ..] => Some(BomKind::Utf32Le),
        [0xEF, 0xBB, 0xBF, ..] => Some(BomKind::Utf8),
        [0xFE, 0xFF, ..] => Some(BomKind::Utf16Be),
        [0xFF, 0xFE, ..] => Some(BomKind::Utf16Le),
        _ => None,
    }
}

/// The byte-oriented body of `data`: a UTF-8 BOM is dropped, and text
/// marked as UTF-16 or UTF-32 yields `None`.
#[inline]
pub fn utf8_body(data: &[u8]) -> Option<&[u8]> {
    match detect_bom(data) {
        None => Some(data),
        Some(kind) if kind.is_utf8() => data.get(3..),
        Some(_) => None,
    }
}
