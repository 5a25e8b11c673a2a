//! `snprintf`-style bounded formatting into a byte buffer.
//!
//! Only `%s` conversions are modelled: the output is the concatenation of the
//! given strings, truncated to `size - 1` bytes and null-terminated.

use std::io::{self, Write};

use crate::str::strlen;

/// A writer over a fixed buffer that keeps room for a terminator.
///
/// Writes past the capacity are dropped but still counted, so [`total`]
/// reports the length the output would have had without truncation.
///
/// [`total`]: BoundedWriter::total
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    total: usize,
}

impl<'a> BoundedWriter<'a> {
    /// Wrap the first `size` bytes of `buf` (clamped to its length).
    pub fn new(buf: &'a mut [u8], size: usize) -> Self {
        let size = size.min(buf.len());
        Self {
            buf: &mut buf[..size],
            pos: 0,
            total: 0,
        }
    }

    /// Bytes requested so far, including any that were truncated.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Write the terminator after the stored bytes. No-op for a zero-size buffer.
    pub fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
    }
}

impl Write for BoundedWriter<'_> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let room = self.buf.len().saturating_sub(1).saturating_sub(self.pos);
        let n = data.len().min(room);
        self.buf[self.pos..self.pos + n].copy_from_slice(&data[..n]);
        self.pos += n;
        self.total += data.len();
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Format `parts` as `"%s%s..."` into `dest` with a size limit.
///
/// Each part is read up to its first null byte. Returns the untruncated
/// output length, like C `snprintf`.
///
/// # Examples
/// ```
/// use strxbench::snprintf::snprintf;
/// let mut dest = [0u8; 8];
/// assert_eq!(snprintf(&mut dest, 6, &[b"abc\0", b"defg\0"]), 7);
/// assert_eq!(&dest[..6], b"abcde\0");
/// ```
pub fn snprintf(dest: &mut [u8], size: usize, parts: &[&[u8]]) -> usize {
    let mut w = BoundedWriter::new(dest, size);
    for part in parts {
        let len = strlen(part);
        // BoundedWriter never fails; it only truncates.
        let _ = w.write_all(&part[..len]);
    }
    w.terminate();
    w.total()
}

/// `snprintf(dest, size, "%s", src)` in the shared copy prototype.
pub fn snprintf_str(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    snprintf(dest, size, &[src])
}

#[cfg(test)]
mod tests {
    use super::{BoundedWriter, snprintf, snprintf_str};
    use std::io::Write;

    #[test]
    fn test_snprintf_str_fits() {
        let mut dest = [0xAAu8; 8];
        assert_eq!(snprintf_str(&mut dest, b"abc\0", 8), 3);
        assert_eq!(&dest[..5], b"abc\0\xAA");
    }

    #[test]
    fn test_snprintf_str_truncates() {
        let mut dest = [0xAAu8; 8];
        assert_eq!(snprintf_str(&mut dest, b"abcdefgh\0", 4), 8);
        assert_eq!(&dest[..5], b"abc\0\xAA");
    }

    #[test]
    fn test_snprintf_zero_size_untouched() {
        let mut dest = [0xAAu8; 4];
        assert_eq!(snprintf(&mut dest, 0, &[b"abc\0"]), 3);
        assert_eq!(dest, [0xAA; 4]);
    }

    #[test]
    fn test_bounded_writer_counts_dropped_bytes() {
        let mut buf = [0u8; 4];
        let mut w = BoundedWriter::new(&mut buf, 4);
        w.write_all(b"hello").unwrap();
        assert_eq!(w.total(), 5);
        w.terminate();
        assert_eq!(&buf, b"hel\0");
    }
}
