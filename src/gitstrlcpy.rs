//! `strlcpy` as implemented in git's `compat/strlcpy.c`.

use crate::str::strlen;

/// Copy `src` into `dest` with a size limit, measuring `src` first.
///
/// The whole source is measured up front, then `min(len, size - 1)` bytes are
/// copied in one block and terminated. Returns the full source length, so a
/// return value `>= size` means the copy was truncated.
///
/// # Examples
/// ```
/// use strxbench::gitstrlcpy::git_strlcpy;
/// let mut dest = [0u8; 4];
/// assert_eq!(git_strlcpy(&mut dest, b"abcdef\0", 4), 6);
/// assert_eq!(&dest, b"abc\0");
/// ```
pub fn git_strlcpy(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    let ret = strlen(src);
    let size = size.min(dest.len());

    if size > 0 {
        let len = if ret >= size { size - 1 } else { ret };
        crate::mem::memcpy(dest, src, len);
        dest[len] = 0;
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::git_strlcpy;

    #[test]
    fn test_git_strlcpy_fits() {
        let mut dest = [0xAAu8; 8];
        assert_eq!(git_strlcpy(&mut dest, b"hi\0", 8), 2);
        assert_eq!(&dest[..4], b"hi\0\xAA");
    }

    #[test]
    fn test_git_strlcpy_length_ignores_bound() {
        let mut dest = [0xAAu8; 8];
        assert_eq!(git_strlcpy(&mut dest, b"0123456789ABCDEF\0", 3), 16);
        assert_eq!(&dest[..4], b"01\0\xAA");
    }

    #[test]
    fn test_git_strlcpy_zero_size() {
        let mut dest = [0xAAu8; 2];
        assert_eq!(git_strlcpy(&mut dest, b"abc\0", 0), 3);
        assert_eq!(dest, [0xAA; 2]);
    }
}
