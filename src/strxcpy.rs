//! `strxcpy`: bounded string copy that always terminates.
//!
//! Unlike `strncpy` the destination is terminated on truncation, and unlike
//! `strlcpy` the source is never scanned past the copy bound. Two contracts
//! exist for the return value and they are kept as separate functions:
//!
//! - [`strxcpy`] returns the number of bytes copied, excluding the terminator.
//! - [`strxcpy_written`] returns the number of bytes written, including it.
//!
//! Both treat `size == 0` as a no-op returning 0.

/// Copy at most `size - 1` bytes of `src` into `dest` and terminate it.
///
/// Copying stops early at the first null byte in `src` (or at the end of
/// `src`). A null byte is written right after the last copied byte, so no
/// more than `size` bytes of `dest` are ever touched. `size` is clamped to
/// `dest.len()`.
///
/// Returns the number of bytes copied, not counting the terminator.
///
/// # Examples
/// ```
/// use strxbench::strxcpy::strxcpy;
/// let mut dest = [0xFFu8; 8];
/// assert_eq!(strxcpy(&mut dest, b"HELLO\0", 3), 2);
/// assert_eq!(&dest[..4], b"HE\0\xFF");
/// ```
pub fn strxcpy(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    let size = size.min(dest.len());
    if size == 0 {
        return 0;
    }

    let bound = (size - 1).min(src.len());
    let mut i = 0;
    while i < bound && src[i] != 0 {
        dest[i] = src[i];
        i += 1;
    }
    dest[i] = 0;
    i
}

/// Same copy as [`strxcpy`], reporting bytes written including the terminator.
///
/// # Examples
/// ```
/// use strxbench::strxcpy::strxcpy_written;
/// let mut dest = [0u8; 8];
/// assert_eq!(strxcpy_written(&mut dest, b"HELLO\0", 3), 3);
/// assert_eq!(strxcpy_written(&mut dest, b"HELLO\0", 0), 0);
/// ```
pub fn strxcpy_written(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    if size.min(dest.len()) == 0 {
        return 0;
    }
    strxcpy(dest, src, size) + 1
}
