//! Memory functions
//!
//! Safe slice versions of the raw memory routines the harness competes
//! against.

/// Scan a byte slice for a character
///
/// Returns the index of the first occurrence of `c` in `s`, or `None` if not found.
///
/// # Examples
/// ```
/// use strxbench::mem::memchr;
/// assert_eq!(memchr(b"hello", b'l'), Some(2));
/// assert_eq!(memchr(b"hello", b'x'), None);
/// ```
pub fn memchr(s: &[u8], c: u8) -> Option<usize> {
    s.iter().position(|&b| b == c)
}

/// Copy `n` bytes from source to destination
///
/// Nul bytes get no special treatment and nothing is terminated. The count
/// is clamped to both slice lengths; returns the number of bytes copied.
///
/// # Examples
/// ```
/// use strxbench::mem::memcpy;
/// let mut dest = [b'.'; 6];
/// assert_eq!(memcpy(&mut dest, b"he\0llo", 4), 4);
/// assert_eq!(&dest, b"he\0l..");
/// ```
pub fn memcpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let n = n.min(dest.len()).min(src.len());
    dest[..n].copy_from_slice(&src[..n]);
    n
}
