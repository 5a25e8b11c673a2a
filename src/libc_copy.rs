//! Platform libc copy routines behind the shared copy prototype.
//!
//! Each wrapper clamps its byte count to the slices it was given before
//! calling into libc. Routines that scan `src` for a terminator (`snprintf`,
//! `strlcpy`) require the slice to end with a null byte; the harness always
//! passes a suffix of a terminated source buffer, so the check is O(1).
#![allow(unsafe_code)]

use core::ffi::{c_char, c_void};

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
unsafe extern "C" {
    #[link_name = "strlcpy"]
    fn libc_strlcpy(dest: *mut c_char, src: *const c_char, size: usize) -> usize;
}

/// Whether the platform libc ships `strlcpy`.
pub const HAS_STRLCPY: bool = cfg!(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
));

fn assert_terminated(src: &[u8]) {
    assert_eq!(src.last(), Some(&0), "source slice must end with a null byte");
}

/// libc `strncpy`. Returns the number of bytes written.
pub fn strncpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let mut n = n.min(dest.len());
    if n > src.len() && src.last() != Some(&0) {
        n = src.len();
    }
    // SAFETY: `dest` is writable for `n` bytes; strncpy stops reading `src`
    // at `n` bytes or at its terminator, and one of them lies inside the slice.
    unsafe {
        libc::strncpy(
            dest.as_mut_ptr() as *mut c_char,
            src.as_ptr() as *const c_char,
            n,
        );
    }
    n
}

/// libc `memcpy`. Returns the number of bytes copied.
pub fn memcpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let n = n.min(dest.len()).min(src.len());
    // SAFETY: both slices cover `n` bytes and `&mut`/`&` borrows cannot overlap.
    unsafe {
        libc::memcpy(
            dest.as_mut_ptr() as *mut c_void,
            src.as_ptr() as *const c_void,
            n,
        );
    }
    n
}

/// libc `snprintf(dest, size, "%s", src)`. Returns the untruncated length.
///
/// # Panics
///
/// Panics if `src` does not end with a null byte.
pub fn snprintf(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    assert_terminated(src);
    let size = size.min(dest.len());
    // SAFETY: `src` is null-terminated within its slice, the format string is
    // a static C string, and snprintf writes at most `size` bytes to `dest`.
    let ret = unsafe {
        libc::snprintf(
            dest.as_mut_ptr() as *mut c_char,
            size,
            c"%s".as_ptr(),
            src.as_ptr() as *const c_char,
        )
    };
    usize::try_from(ret).unwrap_or(0)
}

/// libc `strlcpy`. Returns the length of `src`.
///
/// # Panics
///
/// Panics if `src` does not end with a null byte.
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
pub fn strlcpy(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    assert_terminated(src);
    let size = size.min(dest.len());
    // SAFETY: `src` is null-terminated within its slice and strlcpy writes at
    // most `size` bytes to `dest`.
    unsafe {
        libc_strlcpy(
            dest.as_mut_ptr() as *mut c_char,
            src.as_ptr() as *const c_char,
            size,
        )
    }
}
