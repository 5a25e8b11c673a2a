//! String copy functions
//!
//! Safe Rust versions of the classic C copy routines. These operate on byte
//! slices and treat 0 (null byte) as the string terminator; the end of a
//! slice counts as a terminator when no null byte is present.
//!
//! Every copy takes an explicit `n`/`size` alongside the destination slice so
//! it can be driven through the same prototype as its libc counterpart. The
//! effective capacity is always clamped to `dest.len()`.

/// Calculate the length of a null-terminated string
///
/// Returns the number of bytes before the first null byte (0).
/// If no null byte is found, returns the length of the slice.
///
/// # Examples
/// ```
/// use strxbench::str::strlen;
/// assert_eq!(strlen(b"hello\0world"), 5);
/// assert_eq!(strlen(b"\0"), 0);
/// assert_eq!(strlen(b"hello"), 5); // no null terminator
/// ```
pub fn strlen(s: &[u8]) -> usize {
    crate::mem::memchr(s, 0).unwrap_or(s.len())
}

/// Calculate bounded length of a null-terminated string
///
/// Returns the number of bytes before the first null byte, but at most `maxlen`.
///
/// # Examples
/// ```
/// use strxbench::str::strnlen;
/// assert_eq!(strnlen(b"hello\0world", 10), 5);
/// assert_eq!(strnlen(b"hello", 3), 3);
/// ```
pub fn strnlen(s: &[u8], maxlen: usize) -> usize {
    let limit = s.len().min(maxlen);
    crate::mem::memchr(&s[..limit], 0).unwrap_or(limit)
}

/// Copy a string with length limit
///
/// Copies at most `n` bytes from `src` to `dest`. If `src` is shorter than `n`,
/// the remainder of `dest` is padded with null bytes. When `src` is at least
/// `n` bytes long the destination is left unterminated.
///
/// Returns the number of bytes written (`n` clamped to `dest.len()`).
///
/// # Examples
/// ```
/// use strxbench::str::strncpy;
/// let mut dest = [0xFFu8; 10];
/// strncpy(&mut dest, b"hi\0", 5);
/// assert_eq!(&dest[..5], b"hi\0\0\0");
/// ```
pub fn strncpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let limit = dest.len().min(n);
    let copy_len = strnlen(src, limit);

    dest[..copy_len].copy_from_slice(&src[..copy_len]);

    // Pad with nulls
    if copy_len < limit {
        dest[copy_len..limit].fill(0);
    }

    limit
}

/// Copy string with size limit (BSD flavour)
///
/// Copies up to `size - 1` bytes from `src` to `dest`, always null-terminating
/// unless `size` is 0. The copy loop stops at the first null byte; after a
/// truncation the rest of `src` is still scanned to compute the return value.
///
/// Returns the length of `src` (for truncation detection).
///
/// # Examples
/// ```
/// use strxbench::str::strlcpy;
/// let mut dest = [0u8; 5];
/// let len = strlcpy(&mut dest, b"hello world\0", 5);
/// assert_eq!(len, 11); // src length
/// assert_eq!(&dest, b"hell\0"); // truncated + null
/// ```
pub fn strlcpy(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    let size = size.min(dest.len());
    if size == 0 {
        return strlen(src);
    }

    let mut i = 0;
    while i < size - 1 && i < src.len() && src[i] != 0 {
        dest[i] = src[i];
        i += 1;
    }
    dest[i] = 0;

    i + strlen(&src[i..])
}
