//! The copy variants the harness knows how to time.

use crate::config::ConfigError;
use crate::driver::{CopyFn, Prototype};
use crate::libc_copy;

/// A labelled copy function and the prototype it is driven through.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Short name accepted by `--variant`.
    pub key: &'static str,
    /// Label printed in front of the timing.
    pub label: &'static str,
    pub prototype: Prototype,
    pub func: CopyFn,
}

impl Variant {
    const fn new(
        key: &'static str,
        label: &'static str,
        prototype: Prototype,
        func: CopyFn,
    ) -> Self {
        Self {
            key,
            label,
            prototype,
            func,
        }
    }
}

/// Every variant available on this platform, in run order.
pub fn available() -> Vec<Variant> {
    let mut out = vec![
        Variant::new(
            "libc-strncpy",
            "strncpy from libc",
            Prototype::Strncpy,
            libc_copy::strncpy,
        ),
        Variant::new(
            "strncpy",
            "strncpy in rust",
            Prototype::Strncpy,
            crate::str::strncpy,
        ),
        Variant::new(
            "strxcpy",
            "strxcpy by me",
            Prototype::Strlcpy,
            crate::strxcpy::strxcpy,
        ),
        Variant::new(
            "strxcpy-written",
            "strxcpy by me, counting nul",
            Prototype::Strlcpy,
            crate::strxcpy::strxcpy_written,
        ),
    ];

    #[cfg(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    ))]
    out.push(Variant::new(
        "libc-strlcpy",
        "strlcpy from libc",
        Prototype::Strlcpy,
        libc_copy::strlcpy,
    ));

    out.extend([
        Variant::new(
            "strlcpy",
            "strlcpy in rust",
            Prototype::Strlcpy,
            crate::str::strlcpy,
        ),
        Variant::new(
            "gitstrlcpy",
            "gitstrlcpy from git",
            Prototype::Strlcpy,
            crate::gitstrlcpy::git_strlcpy,
        ),
        Variant::new(
            "libc-snprintf",
            "snprintf from libc",
            Prototype::Strlcpy,
            libc_copy::snprintf,
        ),
        Variant::new(
            "snprintf",
            "snprintf in rust",
            Prototype::Strlcpy,
            crate::snprintf::snprintf_str,
        ),
        Variant::new(
            "libc-memcpy",
            "memcpy from libc",
            Prototype::Strncpy,
            libc_copy::memcpy,
        ),
        Variant::new(
            "memcpy",
            "memcpy in rust",
            Prototype::Strncpy,
            crate::mem::memcpy,
        ),
    ]);
    out
}

/// Look up an available variant by key.
pub fn find(key: &str) -> Option<Variant> {
    available().into_iter().find(|v| v.key == key)
}

/// Resolve `keys` to variants, keeping the order given. An empty list selects
/// every available variant.
pub fn select(keys: &[String]) -> Result<Vec<Variant>, ConfigError> {
    if keys.is_empty() {
        return Ok(available());
    }
    keys.iter()
        .map(|k| find(k).ok_or_else(|| ConfigError::UnknownVariant(k.clone())))
        .collect()
}
