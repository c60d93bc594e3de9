//! Bounded prefix reading for streams and files.
//!
//! Signatures only ever see the first `read_limit` bytes, so there is no
//! reason to pull more than that out of a reader.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::trace;

use crate::common::error::Result;
use crate::mime::Mime;

use super::Detector;

/// Read up to `limit` bytes from `reader`, or everything when `limit` is 0.
///
/// Short reads are retried until the limit or end of stream is reached.
pub fn read_prefix<R: Read>(reader: R, limit: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(limit.min(64 * 1024));
    match limit {
        0 => {
            let mut reader = reader;
            reader.read_to_end(&mut buf)?;
        },
        limit => {
            reader.take(limit as u64).read_to_end(&mut buf)?;
        },
    }
    Ok(buf)
}

impl Detector {
    /// Classify the first `read_limit` bytes produced by `reader`.
    ///
    /// The reader is not consumed beyond the limit.
    ///
    /// ```rust
    /// # fn main() -> longan::Result<()> {
    /// let detector = longan::Detector::builtin()?;
    /// let mime = detector.detect_reader(&b"%PDF-1.7\n..."[..])?;
    /// assert_eq!(mime.extension(), "pdf");
    /// # Ok(())
    /// # }
    /// ```
    pub fn detect_reader<R: Read>(&self, reader: R) -> Result<Mime<'_>> {
        let prefix = read_prefix(reader, self.options.read_limit)?;
        trace!(len = prefix.len(), "read detection prefix");
        Ok(self.detect(&prefix))
    }

    /// Open `path` and classify its leading bytes.
    pub fn detect_file<P: AsRef<Path>>(&self, path: P) -> Result<Mime<'_>> {
        let file = File::open(path)?;
        self.detect_reader(file)
    }
}
