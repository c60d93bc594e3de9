//! Signature predicate contract.
//!
//! A signature decides whether a bounded byte prefix belongs to a node's
//! format. Implementations must not assume any minimum length, must run in
//! time bounded by the buffer length, and must have no side effects. Short
//! or malformed input answers `false`.

/// A pure predicate over a bounded byte buffer.
///
/// Any `Fn(&[u8]) -> bool` that is `Send + Sync` is a signature, so plain
/// functions and capturing closures both work.
///
/// # Examples
///
/// ```rust
/// use longan::tree::Signature;
///
/// fn is_pdf(buf: &[u8]) -> bool {
///     buf.starts_with(b"%PDF-")
/// }
///
/// assert!(is_pdf.matches(b"%PDF-1.7"));
/// assert!(!is_pdf.matches(b""));
/// ```
pub trait Signature: Send + Sync {
    /// Return `true` when `buf` carries this format's signature.
    fn matches(&self, buf: &[u8]) -> bool;
}

impl<F> Signature for F
where
    F: Fn(&[u8]) -> bool + Send + Sync,
{
    #[inline]
    fn matches(&self, buf: &[u8]) -> bool {
        self(buf)
    }
}

/// Signature that accepts every buffer. Used by the root.
#[inline]
pub fn any(_buf: &[u8]) -> bool {
    true
}

/// Signature that rejects every buffer.
#[inline]
pub fn never(_buf: &[u8]) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_signatures() {
        let magic = b"OggS".to_vec();
        let sig = move |buf: &[u8]| buf.starts_with(&magic);
        assert!(sig.matches(b"OggS\x00\x02"));
        assert!(!sig.matches(b"Ogg"));
    }

    #[test]
    fn test_constant_signatures() {
        assert!(any.matches(&[]));
        assert!(!never.matches(b"anything"));
    }
}
