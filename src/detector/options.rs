/// Options controlling how a [`Detector`](super::Detector) feeds bytes to
/// the classification tree.
///
/// # Examples
///
/// ```rust
/// use longan::DetectOptions;
///
/// let options = DetectOptions::new()
///     .with_read_limit(8 * 1024)
///     .with_isolate_faults(false);
/// assert_eq!(options.read_limit, 8192);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DetectOptions {
    /// Maximum number of leading bytes handed to signatures.
    ///
    /// Longer buffers are truncated and readers are not consumed past this
    /// point. `0` disables the limit.
    pub read_limit: usize,
    /// Run each signature behind a panic boundary.
    pub isolate_faults: bool,
}

/// Default prefix length. Enough for every built-in header probe; the ZIP
/// and OLE children make a conservative decision from whatever part of the
/// container falls inside it.
pub const DEFAULT_READ_LIMIT: usize = 3072;

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            read_limit: DEFAULT_READ_LIMIT,
            isolate_faults: true,
        }
    }
}

impl DetectOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix limit. `0` means unlimited.
    #[inline]
    pub fn with_read_limit(mut self, limit: usize) -> Self {
        self.read_limit = limit;
        self
    }

    /// Set whether panicking signatures are isolated.
    #[inline]
    pub fn with_isolate_faults(mut self, isolate: bool) -> Self {
        self.isolate_faults = isolate;
        self
    }

    /// The part of `buf` that signatures are allowed to see.
    #[inline]
    pub fn bound<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        match self.read_limit {
            0 => buf,
            limit => &buf[..buf.len().min(limit)],
        }
    }
}
