//! strxbench: bounded string-copy primitives and a chunked copy benchmark.
//!
//! The copy routines operate on byte slices and treat 0 as the string
//! terminator. They all share the `(dest, src, n) -> usize` shape so the
//! [`driver`] can time any of them over the same chunk schedule.

pub mod chunk;
pub mod config;
pub mod driver;
pub mod gitstrlcpy;
pub mod hexgen;
pub mod libc_copy;
pub mod mem;
pub mod snprintf;
pub mod str;
pub mod strxcpy;
pub mod timing;
pub mod variants;
