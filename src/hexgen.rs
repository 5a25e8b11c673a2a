//! Benchmark source generation.

use core::ops::Deref;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Fill `buf` with a repeating hex-digit string of `len` bytes plus a null.
///
/// Position `i` receives `"0123456789ABCDEF"[i % 16]` and position `len`
/// receives the terminator. `buf` must hold at least `len + 1` bytes; a
/// shorter buffer panics on the slice bound.
///
/// # Examples
/// ```
/// use strxbench::hexgen::gen_hex_str;
/// let mut buf = [0xFFu8; 21];
/// gen_hex_str(&mut buf, 20);
/// assert_eq!(&buf, b"0123456789ABCDEF0123\0");
/// ```
pub fn gen_hex_str(buf: &mut [u8], len: usize) {
    for (i, b) in buf[..len].iter_mut().enumerate() {
        *b = HEX[i & 0xf];
    }
    buf[len] = 0;
}

/// An owned, immutable, null-terminated hex source buffer.
///
/// Derefs to the full `len + 1` byte slice, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexSource {
    buf: Vec<u8>,
}

impl HexSource {
    /// # Panics
    ///
    /// Panics if `len + 1` overflows `usize`.
    pub fn new(len: usize) -> Self {
        let Some(size) = len.checked_add(1) else {
            panic!("source length {len} leaves no room for the terminator");
        };
        let mut buf = vec![0u8; size];
        gen_hex_str(&mut buf, len);
        Self { buf }
    }

    /// String length, excluding the terminator.
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Deref for HexSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}
