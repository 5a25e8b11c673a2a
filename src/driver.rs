//! Chunked copy driver and the benchmark harness around it.
//!
//! Every copy variant has the shape [`CopyFn`]. The driver hands each call
//! the source from the chunk offset to the end of the buffer (terminator
//! included) and the destination from the chunk's destination offset to the
//! end, so the callee sees exactly what the C prototype would see.

use crate::chunk::{ChunkPlan, Packing};
use crate::config::{BenchConfig, ConfigError};
use crate::hexgen::HexSource;
use crate::timing::{Stopwatch, Timing};
use crate::variants::Variant;

/// Shared copy prototype: `(dest, src, n_or_size) -> count`.
pub type CopyFn = fn(&mut [u8], &[u8], usize) -> usize;

/// How the driver passes the chunk length to a callee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prototype {
    /// `strncpy(dst, src, n)`: the count is the number of bytes to write.
    Strncpy,
    /// `strlcpy(dst, src, size)`: the count is a buffer size that includes
    /// room for the callee's terminator.
    Strlcpy,
}

/// Size passed to strlcpy-style callees for a chunk of `n` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SizeBudget {
    /// `size = n`: the callee copies `n - 1` bytes and terminates.
    Chunk,
    /// `size = n + 1`: the callee copies the whole chunk and terminates.
    ChunkPlusNul,
}

impl SizeBudget {
    pub fn size_for(self, n: usize) -> usize {
        match self {
            SizeBudget::Chunk => n,
            SizeBudget::ChunkPlusNul => n + 1,
        }
    }
}

/// Drive a strncpy-style copy over every chunk of `plan`.
///
/// With [`Packing::Packed`] a terminator is written after the last packed
/// byte. Strided output is never terminated and its gaps are left as is.
pub fn run_strncpy_style(dst: &mut [u8], src: &[u8], plan: &ChunkPlan, cpy: CopyFn) {
    let mut chunks = plan.chunks();
    for c in chunks.by_ref() {
        cpy(&mut dst[c.dst_offset..], &src[c.src_offset..], c.len);
    }
    if plan.packing == Packing::Packed {
        if let Some(b) = dst.get_mut(chunks.packed_end()) {
            *b = 0;
        }
    }
}

/// Drive a strlcpy-style copy over every chunk of `plan`.
///
/// The callee terminates its own output; the driver writes no terminator.
pub fn run_strlcpy_style(
    dst: &mut [u8],
    src: &[u8],
    plan: &ChunkPlan,
    budget: SizeBudget,
    cpy: CopyFn,
) {
    for c in plan.chunks() {
        cpy(
            &mut dst[c.dst_offset..],
            &src[c.src_offset..],
            budget.size_for(c.len),
        );
    }
}

/// Drive `cpy` according to its prototype class.
pub fn run_chunks(
    dst: &mut [u8],
    src: &[u8],
    plan: &ChunkPlan,
    budget: SizeBudget,
    prototype: Prototype,
    cpy: CopyFn,
) {
    match prototype {
        Prototype::Strncpy => run_strncpy_style(dst, src, plan, cpy),
        Prototype::Strlcpy => run_strlcpy_style(dst, src, plan, budget, cpy),
    }
}

/// Source and destination buffers for one benchmark run.
///
/// The source holds `len + 1` bytes; the destination is sized by
/// [`BenchConfig::dst_len`]. Both are released when the harness drops.
#[derive(Debug)]
pub struct Harness {
    config: BenchConfig,
    src: HexSource,
    dst: Vec<u8>,
}

impl Harness {
    /// Validate `config` and allocate both buffers.
    pub fn new(config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dst = vec![0u8; config.dst_len()?];
        let src = HexSource::new(config.len);
        Ok(Self { config, src, dst })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn source(&self) -> &HexSource {
        &self.src
    }

    pub fn destination(&self) -> &[u8] {
        &self.dst
    }

    /// Run one untimed pass of `variant`.
    pub fn run(&mut self, variant: &Variant) {
        let plan = self.config.plan();
        run_chunks(
            &mut self.dst,
            &self.src,
            &plan,
            self.config.size_budget,
            variant.prototype,
            variant.func,
        );
    }

    /// Run one pass of `variant` and measure it with the configured clock.
    pub fn time(&mut self, variant: &Variant) -> Timing {
        log::debug!("running {} ({:?})", variant.key, variant.prototype);
        let watch = Stopwatch::start(self.config.clock);
        self.run(variant);
        let elapsed = watch.elapsed();
        log::trace!(
            "{}: {} chunks, {} bytes covered",
            variant.key,
            self.config.plan().chunks().count(),
            self.config.plan().covered()
        );
        Timing::new(variant.label, elapsed)
    }
}
